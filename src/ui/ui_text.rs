use std::sync::LazyLock;

pub const ICON_ALLOWED: &str = "✔";
pub const ICON_DENIED: &str = "✘";
pub const ICON_COLLAPSED: &str = "▸";
pub const ICON_EXPANDED: &str = "▾";

pub struct UiText {
    pub label_allowed: String,
    pub label_denied: String,

    // --- Layout table ---
    pub label_expanded: String,
    pub label_collapsed: String,

    // --- Referral ---
    pub rf_no_tree: String,
    pub rf_total_referrals: &'static str,
    pub rf_total_volume: &'static str,
    pub rf_total_earnings: &'static str,
    pub rf_rank: &'static str,
    pub rf_registered: String,
    pub rf_root_created: String,
    pub rf_parent_not_found: String,
    pub rf_cap_exceeded: String,
    pub rf_already_exists: String,

    // --- Subscription ---
    pub sub_active: &'static str,
    pub sub_inactive: &'static str,
    pub sub_trial_ends: &'static str,
    pub sub_expires: &'static str,
    pub sub_never: &'static str,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    label_allowed: format!("{} allowed", ICON_ALLOWED),
    label_denied: format!("{} denied", ICON_DENIED),

    label_expanded: format!("{} shown", ICON_EXPANDED),
    label_collapsed: format!("{} collapsed", ICON_COLLAPSED),

    rf_no_tree: "No referral tree yet.".to_string(),
    rf_total_referrals: "Referrals",
    rf_total_volume: "Volume (USDT)",
    rf_total_earnings: "Earnings (USDT)",
    rf_rank: "Rank",
    rf_registered: format!("{} registered", ICON_ALLOWED),
    rf_root_created: format!("{} registered (new tree)", ICON_ALLOWED),
    rf_parent_not_found: format!("{} parent not found", ICON_DENIED),
    rf_cap_exceeded: format!("{} invite cap reached", ICON_DENIED),
    rf_already_exists: format!("{} user already in tree", ICON_DENIED),

    sub_active: "active",
    sub_inactive: "inactive",
    sub_trial_ends: "trial ends",
    sub_expires: "expires",
    sub_never: "never",
});
