//! Trading grid geometry and the static panel table.

use {crate::domain::PanelKey, serde::{Deserialize, Serialize}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

/// Static defaults for one panel, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    pub key: PanelKey,
    pub title: &'static str,
    pub default_width: u32,
    pub default_height: u32,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub resizable: bool,
    pub collapsible: bool,
    pub position: GridPos,
}

impl PanelConfig {
    const fn new(key: PanelKey, title: &'static str, w: u32, h: u32, x: u32, y: u32) -> Self {
        Self {
            key,
            title,
            default_width: w,
            default_height: h,
            min_width: None,
            min_height: None,
            resizable: true,
            collapsible: true,
            position: GridPos { x, y },
        }
    }

    pub const fn default_size(&self) -> GridSize {
        GridSize {
            width: self.default_width,
            height: self.default_height,
        }
    }
}

/// Grid dimensions and per-device clamps.
pub struct GridConfig {
    pub columns: u32,
    pub rows: u32,
    pub gap_px: u32,
    pub tablet_max_width: u32,
    pub tablet_max_height: u32,
}

pub const GRID: GridConfig = GridConfig {
    columns: 12,
    rows: 12,
    gap_px: 8,
    tablet_max_width: 4,
    tablet_max_height: 5,
};

/// One entry per [`PanelKey`], in declaration order.
pub const TRADING_VIEW_LAYOUT: [PanelConfig; 8] = [
    PanelConfig::new(PanelKey::Orderbook, "Order Book", 3, 6, 0, 0),
    PanelConfig {
        collapsible: false,
        ..PanelConfig::new(PanelKey::Chart, "Chart", 6, 6, 3, 0)
    },
    PanelConfig::new(PanelKey::Trades, "Recent Trades", 3, 3, 0, 6),
    PanelConfig::new(PanelKey::Positions, "Open Positions", 3, 3, 3, 6),
    PanelConfig::new(PanelKey::Orders, "Orders", 3, 3, 6, 6),
    PanelConfig::new(PanelKey::Balances, "Balances", 3, 3, 9, 6),
    PanelConfig::new(PanelKey::Subscription, "Subscription", 3, 2, 0, 9),
    PanelConfig::new(PanelKey::ReferralDashboard, "Referral Dashboard", 3, 3, 3, 9),
];

pub fn panel_config(key: PanelKey) -> &'static PanelConfig {
    // Table is indexed by declaration order of PanelKey.
    &TRADING_VIEW_LAYOUT[key as usize]
}
