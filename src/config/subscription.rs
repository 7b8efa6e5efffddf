//! Subscription tier blueprints (pricing, limits, feature lists).

use {
    crate::domain::SubscriptionTier,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BillingInterval {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureFlag {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Numeric quotas, keyed by [`LimitKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubscriptionLimits {
    pub max_bots: u32,
    pub max_pairs: u32,
    pub max_strategies: u32,
    /// Requests per minute.
    pub api_rate_limit: u32,
    pub max_open_positions: u32,
    pub max_webhooks: u32,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LimitKey {
    MaxBots,
    MaxPairs,
    MaxStrategies,
    ApiRateLimit,
    MaxOpenPositions,
    MaxWebhooks,
}

impl SubscriptionLimits {
    pub fn get(&self, key: LimitKey) -> u32 {
        match key {
            LimitKey::MaxBots => self.max_bots,
            LimitKey::MaxPairs => self.max_pairs,
            LimitKey::MaxStrategies => self.max_strategies,
            LimitKey::ApiRateLimit => self.api_rate_limit,
            LimitKey::MaxOpenPositions => self.max_open_positions,
            LimitKey::MaxWebhooks => self.max_webhooks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscriptionPricing {
    pub price_usd: f64,
    pub price_usdt: f64,
    pub interval: BillingInterval,
    pub trial_days: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscriptionBadge {
    pub label: &'static str,
    pub color: &'static str,
    pub glow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscriptionTierToken {
    pub id: SubscriptionTier,
    pub name: &'static str,
    pub description: &'static str,
    pub pricing: SubscriptionPricing,
    pub limits: SubscriptionLimits,
    pub features: &'static [FeatureFlag],
    pub badge: SubscriptionBadge,
    pub priority_support: bool,
    pub referral_multiplier: f64,
}

/// The Master Subscription Configuration
pub struct SubscriptionConfig {
    pub free: SubscriptionTierToken,
    pub pro: SubscriptionTierToken,
    pub pro_plus: SubscriptionTierToken,
    pub enterprise: SubscriptionTierToken,
}

impl SubscriptionConfig {
    pub const fn token(&self, tier: SubscriptionTier) -> &SubscriptionTierToken {
        match tier {
            SubscriptionTier::Free => &self.free,
            SubscriptionTier::Pro => &self.pro,
            SubscriptionTier::ProPlus => &self.pro_plus,
            SubscriptionTier::Enterprise => &self.enterprise,
        }
    }
}

pub const SUBSCRIPTION: SubscriptionConfig = SubscriptionConfig {
    free: SubscriptionTierToken {
        id: SubscriptionTier::Free,
        name: "Free",
        description: "Basic trading access with limited features",
        pricing: SubscriptionPricing {
            price_usd: 0.0,
            price_usdt: 0.0,
            interval: BillingInterval::Monthly,
            trial_days: None,
        },
        limits: SubscriptionLimits {
            max_bots: 1,
            max_pairs: 3,
            max_strategies: 1,
            api_rate_limit: 60,
            max_open_positions: 2,
            max_webhooks: 0,
        },
        features: &[
            FeatureFlag { key: "spot_trading", label: "Spot Trading", description: "Basic spot trading" },
            FeatureFlag { key: "paper_trading", label: "Paper Trading", description: "Simulation mode" },
        ],
        badge: SubscriptionBadge { label: "FREE", color: "#6B7280", glow: false },
        priority_support: false,
        referral_multiplier: 1.0,
    },

    pro: SubscriptionTierToken {
        id: SubscriptionTier::Pro,
        name: "Pro",
        description: "Advanced trading tools and automation",
        pricing: SubscriptionPricing {
            price_usd: 5.0,
            price_usdt: 5.0,
            interval: BillingInterval::Monthly,
            trial_days: Some(7),
        },
        limits: SubscriptionLimits {
            max_bots: 5,
            max_pairs: 20,
            max_strategies: 10,
            api_rate_limit: 300,
            max_open_positions: 20,
            max_webhooks: 10,
        },
        features: &[
            FeatureFlag { key: "futures_trading", label: "Futures Trading", description: "Perpetuals & leverage" },
            FeatureFlag { key: "advanced_charts", label: "Advanced Charts", description: "Indicators, drawing tools" },
            FeatureFlag { key: "alerts", label: "Price Alerts", description: "Custom notifications" },
            FeatureFlag { key: "referral_program", label: "Referral Program", description: "Earn from invites" },
        ],
        badge: SubscriptionBadge { label: "PRO", color: "#3B82F6", glow: true },
        priority_support: true,
        referral_multiplier: 1.5,
    },

    pro_plus: SubscriptionTierToken {
        id: SubscriptionTier::ProPlus,
        name: "Pro+",
        description: "High-frequency trading & automation suite",
        pricing: SubscriptionPricing {
            price_usd: 15.0,
            price_usdt: 15.0,
            interval: BillingInterval::Monthly,
            trial_days: Some(7),
        },
        limits: SubscriptionLimits {
            max_bots: 20,
            max_pairs: 100,
            max_strategies: 50,
            api_rate_limit: 1200,
            max_open_positions: 100,
            max_webhooks: 50,
        },
        features: &[
            FeatureFlag { key: "grid_trading", label: "Grid Bots", description: "Automated grid strategies" },
            FeatureFlag { key: "arbitrage", label: "Arbitrage Engine", description: "Cross-DEX & CEX arbitrage" },
            FeatureFlag { key: "copy_trading", label: "Copy Trading", description: "Mirror top traders" },
            FeatureFlag { key: "priority_execution", label: "Priority Execution", description: "Low latency order routing" },
        ],
        badge: SubscriptionBadge { label: "PRO+", color: "#A855F7", glow: true },
        priority_support: true,
        referral_multiplier: 2.0,
    },

    enterprise: SubscriptionTierToken {
        id: SubscriptionTier::Enterprise,
        name: "Enterprise",
        description: "Institutional-grade infrastructure & support",
        pricing: SubscriptionPricing {
            price_usd: 0.0,
            price_usdt: 0.0,
            interval: BillingInterval::Monthly,
            trial_days: None,
        },
        limits: SubscriptionLimits {
            max_bots: 999,
            max_pairs: 999,
            max_strategies: 999,
            api_rate_limit: 10000,
            max_open_positions: 1000,
            max_webhooks: 999,
        },
        features: &[
            FeatureFlag { key: "dedicated_nodes", label: "Dedicated Nodes", description: "Private RPC & execution nodes" },
            FeatureFlag { key: "custom_integrations", label: "Custom Integrations", description: "API, FIX, OMS, risk systems" },
            FeatureFlag { key: "sla", label: "SLA", description: "99.99% uptime guarantee" },
        ],
        badge: SubscriptionBadge { label: "ENTERPRISE", color: "#F97316", glow: true },
        priority_support: true,
        referral_multiplier: 3.0,
    },
};
