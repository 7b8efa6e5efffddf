//! Referral programme blueprint: commission schedule, rank ladder and limits.

use serde::Serialize;

/// Commission paid to a referrer from the trading fees of a user `level` steps below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferralCommission {
    pub level: u8,
    /// Percent of the trading fee (20.0 = 20%).
    pub percent: f64,
    /// Whether this level still earns from its own sub-levels.
    pub max_depth_reward: bool,
}

/// One step of the referral rank ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferralRank {
    pub id: &'static str,
    pub name: &'static str,
    pub min_referrals: u32,
    pub min_volume_usdt: f64,
    /// Multiplier applied once to the grand-total commission.
    pub commission_boost: f64,
    pub badge_color: &'static str,
    pub glow: bool,
}

/// Anti-abuse limits for registrations and payouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferralLimits {
    /// Direct-children cap checked on every registration.
    pub max_invites_per_day: usize,
    pub max_accounts_per_ip: u32,
    pub min_trading_volume_for_reward: f64,
    pub cooldown_hours: u32,
}

/// What rank a tree gets when its totals qualify for none of the ladder steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RankFallback {
    /// The step with the lowest volume threshold.
    #[default]
    Lowest,
    /// The first step of the descending-by-volume scan, i.e. the top rank.
    /// Kept for dashboards that still expect the legacy default.
    Highest,
}

/// The Master Referral Configuration
#[derive(Debug, Clone, Copy)]
pub struct ReferralConfig {
    pub commissions: &'static [ReferralCommission],
    /// Declaration order is the "at least rank X" order used by permission rules.
    pub ranks: &'static [ReferralRank],
    pub limits: ReferralLimits,
    pub tree_max_depth: u8,
    pub rank_fallback: RankFallback,
}

pub const REFERRAL: ReferralConfig = ReferralConfig {
    commissions: &[
        ReferralCommission { level: 1, percent: 20.0, max_depth_reward: true },
        ReferralCommission { level: 2, percent: 10.0, max_depth_reward: true },
        ReferralCommission { level: 3, percent: 5.0, max_depth_reward: true },
        ReferralCommission { level: 4, percent: 3.0, max_depth_reward: false },
        ReferralCommission { level: 5, percent: 2.0, max_depth_reward: false },
    ],

    ranks: &[
        ReferralRank {
            id: "starter",
            name: "Starter",
            min_referrals: 1,
            min_volume_usdt: 1_000.0,
            commission_boost: 1.0,
            badge_color: "#6B7280",
            glow: false,
        },
        ReferralRank {
            id: "bronze",
            name: "Bronze Partner",
            min_referrals: 10,
            min_volume_usdt: 25_000.0,
            commission_boost: 1.1,
            badge_color: "#CD7F32",
            glow: true,
        },
        ReferralRank {
            id: "silver",
            name: "Silver Partner",
            min_referrals: 50,
            min_volume_usdt: 100_000.0,
            commission_boost: 1.25,
            badge_color: "#C0C0C0",
            glow: true,
        },
        ReferralRank {
            id: "gold",
            name: "Gold Partner",
            min_referrals: 200,
            min_volume_usdt: 500_000.0,
            commission_boost: 1.5,
            badge_color: "#FFD700",
            glow: true,
        },
        ReferralRank {
            id: "platinum",
            name: "Platinum Partner",
            min_referrals: 1000,
            min_volume_usdt: 2_000_000.0,
            commission_boost: 2.0,
            badge_color: "#A855F7",
            glow: true,
        },
    ],

    limits: ReferralLimits {
        max_invites_per_day: 100,
        max_accounts_per_ip: 3,
        min_trading_volume_for_reward: 50.0, // USDT
        cooldown_hours: 24,
    },

    tree_max_depth: 5,
    rank_fallback: RankFallback::Lowest,
};

impl ReferralConfig {
    pub fn commission_for(&self, level: u8) -> Option<&'static ReferralCommission> {
        self.commissions.iter().find(|c| c.level == level)
    }
}
