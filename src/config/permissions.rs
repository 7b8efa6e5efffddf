//! Ordered access rules for features and panels.
//!
//! A key with no entry here is allowed for everyone.

use {crate::domain::SubscriptionTier, serde::Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionRule {
    /// Feature or panel key (`futures_trading`, `orderbook`, ...). Unique within a table.
    pub key: &'static str,
    pub required_tier: Option<SubscriptionTier>,
    /// Referral rank id; compared by position in the rank ladder, not by volume.
    pub min_rank: Option<&'static str>,
    pub kyc_required: bool,
    pub max_risk_level: Option<u32>,
}

impl PermissionRule {
    /// Rule that gates nothing. Listed keys with this rule behave like unlisted keys.
    pub const fn open(key: &'static str) -> Self {
        Self {
            key,
            required_tier: None,
            min_rank: None,
            kyc_required: false,
            max_risk_level: None,
        }
    }

    pub const fn tier(key: &'static str, tier: SubscriptionTier) -> Self {
        Self {
            required_tier: Some(tier),
            ..Self::open(key)
        }
    }
}

use crate::domain::SubscriptionTier::{Enterprise, Pro, ProPlus};

pub const UI_PERMISSIONS: &[PermissionRule] = &[
    // Features
    PermissionRule::open("spot_trading"),
    PermissionRule::tier("futures_trading", Pro),
    PermissionRule::tier("grid_trading", ProPlus),
    PermissionRule::tier("arbitrage", ProPlus),
    PermissionRule::tier("copy_trading", ProPlus),
    PermissionRule {
        min_rank: Some("gold"),
        ..PermissionRule::tier("priority_execution", ProPlus)
    },
    PermissionRule::tier("advanced_charts", Pro),
    PermissionRule::tier("alerts", Pro),
    PermissionRule::tier("referral_program", Pro),
    PermissionRule {
        kyc_required: true,
        ..PermissionRule::tier("dedicated_nodes", Enterprise)
    },
    PermissionRule {
        kyc_required: true,
        ..PermissionRule::tier("custom_integrations", Enterprise)
    },
    // Panels
    PermissionRule::open("orderbook"),
    PermissionRule::open("chart"),
    PermissionRule::open("trades"),
    PermissionRule::open("positions"),
    PermissionRule::open("orders"),
    PermissionRule::open("balances"),
    PermissionRule::open("subscription"),
    PermissionRule {
        min_rank: Some("starter"),
        ..PermissionRule::open("referral_dashboard")
    },
];
