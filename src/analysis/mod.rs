//! Pure computations over the config tables: permission checks, grid layout, referral stats.

pub mod layout_engine;
pub mod permissions;
pub mod referral;

pub use layout_engine::{LayoutRequest, adjust_for_device, initialize_layout, initialize_with};
pub use permissions::{AccessProfile, Denial, PermissionEvaluator, evaluate};
pub use referral::{
    ReferralStats, SubtreeTotals, aggregate, aggregate_with, compute_commission,
    compute_commission_with, compute_rank, compute_rank_with, subtree_totals,
};
