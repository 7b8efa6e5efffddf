use {
    serde::{Deserialize, Serialize},
    strum_macros::{AsRefStr, Display, EnumIter, EnumString},
};

/// A named region of the trading grid.
///
/// Declaration order matches the static layout table and is the iteration order used
/// when building a [`crate::models::LayoutState`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PanelKey {
    Orderbook,
    Chart,
    Trades,
    Positions,
    Orders,
    Balances,
    Subscription,
    ReferralDashboard,
}

/// Product features gated by subscription, referral rank or compliance state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeatureKey {
    SpotTrading,
    FuturesTrading,
    GridTrading,
    Arbitrage,
    CopyTrading,
    PriorityExecution,
    AdvancedCharts,
    Alerts,
    ReferralProgram,
    DedicatedNodes,
    CustomIntegrations,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn eight_panels() {
        assert_eq!(PanelKey::iter().count(), 8);
    }

    #[test]
    fn keys_use_wire_names() {
        assert_eq!(PanelKey::ReferralDashboard.as_ref(), "referral_dashboard");
        assert_eq!(FeatureKey::FuturesTrading.as_ref(), "futures_trading");
        assert_eq!(PanelKey::from_str("orderbook").ok(), Some(PanelKey::Orderbook));
    }
}
