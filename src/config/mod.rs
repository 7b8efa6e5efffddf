//! Configuration module for the dashboard engine.

// Can all be private now because we have a public re-export.
mod debug;
mod layout;
mod permissions;
mod persistence;
mod referral;
mod subscription;

// Re-export commonly used items
pub use debug::DF;
pub use layout::{GRID, GridConfig, GridPos, GridSize, PanelConfig, TRADING_VIEW_LAYOUT, panel_config};
pub use permissions::{PermissionRule, UI_PERMISSIONS};
pub use persistence::PERSISTENCE;
pub use referral::{
    REFERRAL, RankFallback, ReferralCommission, ReferralConfig, ReferralLimits, ReferralRank,
};
pub use subscription::{
    BillingInterval, FeatureFlag, LimitKey, SUBSCRIPTION, SubscriptionConfig, SubscriptionLimits,
    SubscriptionTierToken,
};
