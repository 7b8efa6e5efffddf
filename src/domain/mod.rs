// Domain types and value objects
mod device;
mod gate_key;
mod referral_level;
mod subscription_tier;

// Re-export commonly used types to the world
pub use device::DeviceClass;
pub use gate_key::{FeatureKey, PanelKey};
pub use referral_level::ReferralLevel;
pub use subscription_tier::SubscriptionTier;
