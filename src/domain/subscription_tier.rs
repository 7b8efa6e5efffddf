use {
    serde::{Deserialize, Serialize},
    strum_macros::{AsRefStr, Display, EnumIter, EnumString},
};

/// Subscription level gating feature access.
///
/// Declaration order is the access order: `Free < Pro < ProPlus < Enterprise`.
/// "At least tier X" checks rely on the derived `Ord`, so never reorder the variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Pro,
    ProPlus,
    Enterprise,
}

impl SubscriptionTier {
    /// True when `self` grants at least the access of `required`.
    #[inline]
    pub fn at_least(self, required: SubscriptionTier) -> bool {
        self >= required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tiers_are_ordered_by_declaration() {
        let tiers: Vec<_> = SubscriptionTier::iter().collect();
        assert!(tiers.windows(2).all(|w| w[0] < w[1]));
        assert!(SubscriptionTier::ProPlus.at_least(SubscriptionTier::Pro));
        assert!(!SubscriptionTier::Free.at_least(SubscriptionTier::Pro));
    }

    #[test]
    fn text_form_is_snake_case() {
        assert_eq!(SubscriptionTier::ProPlus.to_string(), "pro_plus");
        assert_eq!(
            SubscriptionTier::from_str("enterprise").ok(),
            Some(SubscriptionTier::Enterprise)
        );
        assert!(SubscriptionTier::from_str("gold").is_err());
    }
}
