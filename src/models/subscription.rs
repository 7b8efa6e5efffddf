use {
    crate::{
        config::{LimitKey, SUBSCRIPTION, SubscriptionTierToken},
        domain::SubscriptionTier,
        utils::TimeUtils,
    },
    serde::{Deserialize, Serialize},
};

/// A user's subscription as seen by the dashboard. Timestamps are epoch milliseconds.
///
/// Every transition returns a new state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionState {
    pub tier: SubscriptionTier,
    pub expires_at_ms: Option<i64>,
    pub trial_ends_at_ms: Option<i64>,
    pub is_active: bool,
    pub is_trial: bool,
    pub referral_multiplier: f64,
}

impl Default for SubscriptionState {
    fn default() -> Self {
        Self::free()
    }
}

impl SubscriptionState {
    pub fn free() -> Self {
        Self::fresh(SubscriptionTier::Free, None, None)
    }

    fn fresh(tier: SubscriptionTier, expires_at_ms: Option<i64>, trial_ends_at_ms: Option<i64>) -> Self {
        Self {
            tier,
            expires_at_ms,
            trial_ends_at_ms,
            is_active: true,
            is_trial: trial_ends_at_ms.is_some(),
            referral_multiplier: SUBSCRIPTION.token(tier).referral_multiplier,
        }
    }

    pub fn token(&self) -> &'static SubscriptionTierToken {
        SUBSCRIPTION.token(self.tier)
    }

    pub fn upgrade(&self, tier: SubscriptionTier, expires_at_ms: i64) -> Self {
        Self::fresh(tier, Some(expires_at_ms), None)
    }

    pub fn start_trial(&self, tier: SubscriptionTier, days: u32, now_ms: i64) -> Self {
        let trial_ends_at_ms = now_ms.saturating_add(i64::from(days) * TimeUtils::MS_IN_D);
        Self::fresh(tier, None, Some(trial_ends_at_ms))
    }

    pub fn cancel(&self) -> Self {
        Self::free()
    }

    /// Re-derives `is_active` / `is_trial` at `now_ms`. A running trial wins over expiry.
    ///
    /// A trial that has ended without a paid period behind it leaves the plan inactive.
    pub fn refresh(&self, now_ms: i64) -> Self {
        let mut next = self.clone();
        next.is_trial = false;
        next.is_active = true;

        match (self.trial_ends_at_ms, self.expires_at_ms) {
            (Some(trial_end), _) if now_ms < trial_end => next.is_trial = true,
            (_, Some(end)) => next.is_active = now_ms <= end,
            (Some(_), None) => next.is_active = false,
            (None, None) => {}
        }
        next
    }

    /// Tier to gate features with: an inactive subscription grants only the free tier.
    pub fn effective_tier(&self) -> SubscriptionTier {
        if self.is_active {
            self.tier
        } else {
            SubscriptionTier::Free
        }
    }

    /// True when the tier's own feature list names `key`.
    pub fn has_feature(&self, key: &str) -> bool {
        self.token().features.iter().any(|f| f.key == key)
    }

    pub fn has_limit(&self, limit: LimitKey, value: u32) -> bool {
        value <= self.token().limits.get(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn default_is_active_free() {
        let s = SubscriptionState::default();
        assert_eq!(s.tier, SubscriptionTier::Free);
        assert!(s.is_active && !s.is_trial);
        assert_eq!(s.referral_multiplier, 1.0);
    }

    #[test]
    fn upgrade_takes_tier_multiplier() {
        let s = SubscriptionState::free().upgrade(SubscriptionTier::ProPlus, NOW + 1);
        assert_eq!(s.referral_multiplier, 2.0);
        assert!(s.has_feature("grid_trading"));
        assert!(!s.has_feature("spot_trading"));
    }

    #[test]
    fn trial_then_expiry() {
        let trial = SubscriptionState::free().start_trial(SubscriptionTier::Pro, 7, NOW);
        assert!(trial.refresh(NOW + TimeUtils::MS_IN_D).is_trial);

        let over = trial.refresh(NOW + 8 * TimeUtils::MS_IN_D);
        assert!(!over.is_trial);
        assert!(!over.is_active);
        assert_eq!(over.effective_tier(), SubscriptionTier::Free);

        let paid = trial.upgrade(SubscriptionTier::Pro, NOW);
        let lapsed = paid.refresh(NOW + 1);
        assert!(!lapsed.is_active);
        assert_eq!(lapsed.effective_tier(), SubscriptionTier::Free);
    }

    #[test]
    fn lapsed_trial_stays_free_long_after() {
        let trial = SubscriptionState::free().start_trial(SubscriptionTier::ProPlus, 7, NOW);
        let year_on = trial.refresh(NOW + 365 * TimeUtils::MS_IN_D);
        assert!(!year_on.is_trial && !year_on.is_active);
        assert_eq!(year_on.effective_tier(), SubscriptionTier::Free);

        // Refreshing on the last trial millisecond still counts as trialling.
        let edge = trial.refresh(NOW + 7 * TimeUtils::MS_IN_D - 1);
        assert!(edge.is_trial && edge.is_active);
        assert_eq!(edge.effective_tier(), SubscriptionTier::ProPlus);
    }

    #[test]
    fn free_plan_never_lapses() {
        let s = SubscriptionState::free().refresh(NOW + 365 * TimeUtils::MS_IN_D);
        assert!(s.is_active);
        assert_eq!(s.effective_tier(), SubscriptionTier::Free);
    }

    #[test]
    fn limits() {
        let pro = SubscriptionState::free().upgrade(SubscriptionTier::Pro, NOW);
        assert!(pro.has_limit(LimitKey::MaxBots, 5));
        assert!(!pro.has_limit(LimitKey::MaxBots, 6));
        assert!(!SubscriptionState::free().has_limit(LimitKey::MaxWebhooks, 1));
    }

    #[test]
    fn cancel_resets_to_free() {
        let s = SubscriptionState::free()
            .upgrade(SubscriptionTier::Enterprise, NOW)
            .cancel();
        assert_eq!(s, SubscriptionState::free());
    }
}
