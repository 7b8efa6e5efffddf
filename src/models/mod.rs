mod layout_state;
mod referral_tree;
mod subscription;

pub use {
    layout_state::LayoutState,
    referral_tree::{NodeId, ReferralNode, ReferralTree, ReferralUserNode, RegistrationOutcome},
    subscription::SubscriptionState,
};
