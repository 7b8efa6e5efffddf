//! Permission evaluation over the ordered rule table.

use {
    crate::{
        config::{DF, PermissionRule, REFERRAL, ReferralRank, UI_PERMISSIONS},
        domain::SubscriptionTier,
    },
    serde::{Deserialize, Serialize},
};

/// Everything the evaluator needs to know about the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessProfile {
    pub tier: SubscriptionTier,
    pub rank_id: Option<String>,
    pub kyc_completed: bool,
    pub risk_level: u32,
}

impl AccessProfile {
    pub fn new(tier: SubscriptionTier) -> Self {
        Self {
            tier,
            ..Default::default()
        }
    }

    pub fn with_rank(mut self, rank_id: impl Into<String>) -> Self {
        self.rank_id = Some(rank_id.into());
        self
    }

    pub fn with_kyc(mut self, kyc_completed: bool) -> Self {
        self.kyc_completed = kyc_completed;
        self
    }

    pub fn with_risk(mut self, risk_level: u32) -> Self {
        self.risk_level = risk_level;
        self
    }
}

/// First rule condition that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Tier { required: SubscriptionTier },
    Rank { required: &'static str },
    Kyc,
    Risk { max: u32 },
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tier { required } => write!(f, "requires {} subscription", required),
            Self::Rank { required } => write!(f, "requires referral rank {} or above", required),
            Self::Kyc => write!(f, "requires completed KYC"),
            Self::Risk { max } => write!(f, "risk level above {}", max),
        }
    }
}

/// Evaluates keys against a rule table and a rank ladder.
///
/// `Default` uses the static [`UI_PERMISSIONS`] table and the [`REFERRAL`] ranks.
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    rules: &'a [PermissionRule],
    ranks: &'a [ReferralRank],
}

impl Default for PermissionEvaluator<'static> {
    fn default() -> Self {
        Self::new(UI_PERMISSIONS, REFERRAL.ranks)
    }
}

impl<'a> PermissionEvaluator<'a> {
    pub fn new(rules: &'a [PermissionRule], ranks: &'a [ReferralRank]) -> Self {
        Self { rules, ranks }
    }

    pub fn rule(&self, key: &str) -> Option<&'a PermissionRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    /// `None` sorts below every rank, so an absent or unknown id never meets a minimum.
    fn rank_position(&self, rank_id: Option<&str>) -> Option<usize> {
        let id = rank_id?;
        self.ranks.iter().position(|r| r.id == id)
    }

    /// The first failing condition for `key`, or `None` when access is granted.
    /// Keys without a rule are granted.
    pub fn denial_reason(&self, key: &str, profile: &AccessProfile) -> Option<Denial> {
        let rule = self.rule(key)?;

        if let Some(required) = rule.required_tier {
            if !profile.tier.at_least(required) {
                return Some(Denial::Tier { required });
            }
        }

        if let Some(required) = rule.min_rank {
            let required_pos = self.rank_position(Some(required));
            let user_pos = self.rank_position(profile.rank_id.as_deref());
            if user_pos < required_pos {
                return Some(Denial::Rank { required });
            }
        }

        if rule.kyc_required && !profile.kyc_completed {
            return Some(Denial::Kyc);
        }

        if let Some(max) = rule.max_risk_level {
            if profile.risk_level > max {
                return Some(Denial::Risk { max });
            }
        }

        None
    }

    pub fn evaluate(&self, key: &str, profile: &AccessProfile) -> bool {
        match self.denial_reason(key, profile) {
            None => true,
            Some(denial) => {
                if DF.log_permission_denials {
                    log::debug!("Denied '{}' for {:?}: {}", key, profile.tier, denial);
                }
                false
            }
        }
    }

    /// Keys of every rule in the table that `profile` passes, in table order.
    pub fn allowed_keys(&self, profile: &AccessProfile) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| self.evaluate(r.key, profile))
            .map(|r| r.key)
            .collect()
    }
}

/// Checks `key` against the static rule table.
pub fn evaluate(
    key: &str,
    tier: SubscriptionTier,
    rank_id: Option<&str>,
    kyc_completed: bool,
    risk_level: u32,
) -> bool {
    let profile = AccessProfile {
        tier,
        rank_id: rank_id.map(str::to_owned),
        kyc_completed,
        risk_level,
    };
    PermissionEvaluator::default().evaluate(key, &profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeatureKey, PanelKey};
    use strum::IntoEnumIterator;

    #[test]
    fn futures_needs_pro() {
        assert!(!evaluate("futures_trading", SubscriptionTier::Free, None, false, 0));
        assert!(evaluate("futures_trading", SubscriptionTier::Pro, None, false, 0));
        assert!(evaluate("futures_trading", SubscriptionTier::Enterprise, None, false, 0));
    }

    #[test]
    fn unknown_key_is_allowed() {
        assert!(evaluate("does_not_exist", SubscriptionTier::Free, None, false, 99));
    }

    #[test]
    fn rank_gate_denies_missing_rank() {
        let ev = PermissionEvaluator::default();
        let profile = AccessProfile::new(SubscriptionTier::ProPlus);
        assert_eq!(
            ev.denial_reason("priority_execution", &profile),
            Some(Denial::Rank { required: "gold" })
        );
        assert!(!ev.evaluate("priority_execution", &profile.clone().with_rank("silver")));
        assert!(ev.evaluate("priority_execution", &profile.clone().with_rank("gold")));
        assert!(ev.evaluate("priority_execution", &profile.with_rank("platinum")));
    }

    #[test]
    fn unknown_rank_id_is_treated_as_absent() {
        let ev = PermissionEvaluator::default();
        let profile = AccessProfile::new(SubscriptionTier::Free).with_rank("diamond");
        assert!(!ev.evaluate(PanelKey::ReferralDashboard.as_ref(), &profile));
    }

    #[test]
    fn kyc_checked_after_tier() {
        let ev = PermissionEvaluator::default();
        let profile = AccessProfile::new(SubscriptionTier::Pro);
        // Tier fails first, so the reason is the tier even without KYC.
        assert_eq!(
            ev.denial_reason("dedicated_nodes", &profile),
            Some(Denial::Tier { required: SubscriptionTier::Enterprise })
        );
        let enterprise = AccessProfile::new(SubscriptionTier::Enterprise);
        assert_eq!(ev.denial_reason("dedicated_nodes", &enterprise), Some(Denial::Kyc));
        assert!(ev.evaluate("dedicated_nodes", &enterprise.with_kyc(true)));
    }

    #[test]
    fn risk_cap_is_inclusive() {
        let rules = [PermissionRule {
            max_risk_level: Some(3),
            ..PermissionRule::open("leverage_100x")
        }];
        let ev = PermissionEvaluator::new(&rules, REFERRAL.ranks);
        let profile = AccessProfile::new(SubscriptionTier::Free);
        assert!(ev.evaluate("leverage_100x", &profile.clone().with_risk(3)));
        assert_eq!(
            ev.denial_reason("leverage_100x", &profile.with_risk(4)),
            Some(Denial::Risk { max: 3 })
        );
    }

    #[test]
    fn unknown_required_rank_never_blocks() {
        let rules = [PermissionRule {
            min_rank: Some("mythic"),
            ..PermissionRule::open("vault")
        }];
        let ev = PermissionEvaluator::new(&rules, REFERRAL.ranks);
        assert!(ev.evaluate("vault", &AccessProfile::default()));
    }

    #[test]
    fn every_feature_has_a_rule() {
        let ev = PermissionEvaluator::default();
        for key in FeatureKey::iter() {
            assert!(ev.rule(key.as_ref()).is_some(), "missing rule for {}", key);
        }
    }

    #[test]
    fn free_tier_allowed_keys() {
        let ev = PermissionEvaluator::default();
        let keys = ev.allowed_keys(&AccessProfile::default());
        assert!(keys.contains(&"spot_trading"));
        assert!(keys.contains(&"orderbook"));
        assert!(!keys.contains(&"futures_trading"));
        assert!(!keys.contains(&"referral_dashboard"));
    }
}
