use {
    itertools::Itertools,
    tabled::{Table, Tabled, settings::Style},
};

use crate::{
    analysis::{AccessProfile, Denial, ReferralStats, subtree_totals},
    config::panel_config,
    models::{LayoutState, ReferralTree, RegistrationOutcome, SubscriptionState},
    ui::UI_TEXT,
    utils::{epoch_ms_to_utc, format_remaining},
};

#[derive(Tabled)]
struct PanelRow {
    #[tabled(rename = "Panel")]
    key: String,
    #[tabled(rename = "Title")]
    title: &'static str,
    #[tabled(rename = "X")]
    x: u32,
    #[tabled(rename = "Y")]
    y: u32,
    #[tabled(rename = "W")]
    width: u32,
    #[tabled(rename = "H")]
    height: u32,
    #[tabled(rename = "State")]
    state: String,
}

fn describe_profile(profile: &AccessProfile) -> String {
    format!(
        "tier={} rank={} kyc={} risk={}",
        profile.tier,
        profile.rank_id.as_deref().unwrap_or("-"),
        profile.kyc_completed,
        profile.risk_level
    )
}

pub fn permission_line(key: &str, profile: &AccessProfile, denial: Option<Denial>) -> String {
    match denial {
        None => format!("{key}: {} ({})", UI_TEXT.label_allowed, describe_profile(profile)),
        Some(d) => format!(
            "{key}: {}, {d} ({})",
            UI_TEXT.label_denied,
            describe_profile(profile)
        ),
    }
}

pub fn allowed_keys(profile: &AccessProfile, keys: &[&str]) -> String {
    format!("{}\n  {}", describe_profile(profile), keys.iter().join("\n  "))
}

pub fn layout_table(layout: &LayoutState) -> String {
    let rows = layout.panel_positions.iter().map(|(key, pos)| {
        let size = layout.size(*key).unwrap_or_default();
        PanelRow {
            key: key.to_string(),
            title: panel_config(*key).title,
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
            state: if layout.is_collapsed(*key) {
                UI_TEXT.label_collapsed.clone()
            } else {
                UI_TEXT.label_expanded.clone()
            },
        }
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn referral_stats(stats: Option<&ReferralStats>) -> String {
    let Some(stats) = stats else {
        return UI_TEXT.rf_no_tree.clone();
    };
    [
        format!("{:<16} {}", UI_TEXT.rf_total_referrals, stats.total_referrals),
        format!("{:<16} {:.2}", UI_TEXT.rf_total_volume, stats.total_volume_usdt),
        format!("{:<16} {:.2}", UI_TEXT.rf_total_earnings, stats.total_earnings_usdt),
        format!(
            "{:<16} {} (x{})",
            UI_TEXT.rf_rank, stats.rank.name, stats.rank.commission_boost
        ),
    ]
    .join("\n")
}

/// Indented tree, one line per user with the totals of everything below them.
pub fn tree_outline(tree: &ReferralTree) -> String {
    let Some(root) = tree.root() else {
        return UI_TEXT.rf_no_tree.clone();
    };
    let totals = subtree_totals(tree);
    let mut lines = Vec::with_capacity(tree.len());
    let mut stack = vec![(root, 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let Some(node) = tree.node(id) else { continue };
        let t = totals[id.index()];
        lines.push(format!(
            "{}{} [{}] refs={} vol={:.2} comm={:.2}",
            "  ".repeat(depth),
            node.user_id,
            node.level,
            t.referrals,
            t.volume_usdt,
            t.commission_usdt
        ));
        stack.extend(node.children.iter().rev().map(|c| (*c, depth + 1)));
    }

    lines.join("\n")
}

pub fn registration_line(parent: &str, child: &str, outcome: &RegistrationOutcome) -> String {
    let label = match outcome {
        RegistrationOutcome::Registered { .. } => &UI_TEXT.rf_registered,
        RegistrationOutcome::RootCreated { .. } => &UI_TEXT.rf_root_created,
        RegistrationOutcome::ParentNotFound => &UI_TEXT.rf_parent_not_found,
        RegistrationOutcome::CapExceeded { .. } => &UI_TEXT.rf_cap_exceeded,
        RegistrationOutcome::AlreadyExists => &UI_TEXT.rf_already_exists,
    };
    format!("{parent} -> {child}: {label}")
}

pub fn subscription_summary(state: &SubscriptionState, now_ms: i64) -> String {
    let token = state.token();
    let status = if state.is_active {
        UI_TEXT.sub_active
    } else {
        UI_TEXT.sub_inactive
    };
    let (label, end) = match (state.is_trial, state.trial_ends_at_ms, state.expires_at_ms) {
        (true, Some(end), _) | (_, Some(end), None) => (UI_TEXT.sub_trial_ends, Some(end)),
        (_, _, end) => (UI_TEXT.sub_expires, end),
    };
    let when = match end {
        Some(end) => format!(
            "{} ({})",
            epoch_ms_to_utc(end).unwrap_or_default(),
            format_remaining(end.saturating_sub(now_ms))
        ),
        None => UI_TEXT.sub_never.to_string(),
    };

    format!(
        "{} [{}] {}, {} {}, referral x{}",
        token.name, token.badge.label, status, label, when, state.referral_multiplier
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{LayoutRequest, initialize_layout},
        domain::SubscriptionTier,
        models::ReferralUserNode,
    };

    #[test]
    fn layout_table_lists_every_panel() {
        let table = layout_table(&initialize_layout(&LayoutRequest::default()));
        assert!(table.contains("Order Book"));
        assert!(table.contains("Referral Dashboard"));
        assert!(table.contains(&UI_TEXT.label_collapsed));
    }

    #[test]
    fn outline_indents_children() {
        let root = ReferralUserNode::new("root", 1.0, 0.0)
            .with_referrals(vec![ReferralUserNode::new("kid", 2.0, 0.0)]);
        let out = tree_outline(&ReferralTree::from_nested(&root, 5));
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("root [L1] refs=1 vol=3.00"));
        assert!(lines[1].starts_with("  kid [L2]"));
    }

    #[test]
    fn denied_line_carries_reason() {
        let profile = AccessProfile::new(SubscriptionTier::Free);
        let line = permission_line(
            "futures_trading",
            &profile,
            Some(Denial::Tier { required: SubscriptionTier::Pro }),
        );
        assert!(line.contains("requires pro subscription"));
    }

    #[test]
    fn free_plan_never_expires() {
        let line = subscription_summary(&SubscriptionState::free(), 0);
        assert!(line.starts_with("Free [FREE] active"));
        assert!(line.contains(UI_TEXT.sub_never));
    }

    #[test]
    fn lapsed_trial_shows_its_end() {
        let lapsed = SubscriptionState::free()
            .start_trial(SubscriptionTier::Pro, 7, 0)
            .refresh(30 * crate::utils::TimeUtils::MS_IN_D);
        let line = subscription_summary(&lapsed, 30 * crate::utils::TimeUtils::MS_IN_D);
        assert!(line.contains(UI_TEXT.sub_inactive));
        assert!(line.contains(UI_TEXT.sub_trial_ends));
        assert!(line.contains("expired"));
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        let far = SubscriptionState::free().upgrade(SubscriptionTier::Pro, i64::MAX);
        let line = subscription_summary(&far, i64::MIN);
        assert!(line.contains(UI_TEXT.sub_expires));

        let past = SubscriptionState::free().upgrade(SubscriptionTier::Pro, i64::MIN);
        let line = subscription_summary(&past, i64::MAX);
        assert!(line.contains("expired"));
    }
}
