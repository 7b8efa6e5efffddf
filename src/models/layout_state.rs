use {
    crate::{
        config::{GridPos, GridSize},
        domain::PanelKey,
    },
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Per-panel geometry and visibility of the trading grid.
///
/// Every map holds exactly one entry per [`PanelKey`]. Updaters return a new state and leave
/// `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutState {
    pub panel_positions: BTreeMap<PanelKey, GridPos>,
    pub panel_sizes: BTreeMap<PanelKey, GridSize>,
    pub collapsed: BTreeMap<PanelKey, bool>,
}

impl LayoutState {
    pub fn position(&self, key: PanelKey) -> Option<GridPos> {
        self.panel_positions.get(&key).copied()
    }

    pub fn size(&self, key: PanelKey) -> Option<GridSize> {
        self.panel_sizes.get(&key).copied()
    }

    pub fn is_collapsed(&self, key: PanelKey) -> bool {
        self.collapsed.get(&key).copied().unwrap_or(false)
    }

    /// Panels that are currently expanded, in key order.
    pub fn visible_panels(&self) -> impl Iterator<Item = PanelKey> + '_ {
        self.collapsed
            .iter()
            .filter(|(_, collapsed)| !**collapsed)
            .map(|(key, _)| *key)
    }

    pub fn toggle_collapse(&self, key: PanelKey) -> Self {
        let mut next = self.clone();
        let flipped = !self.is_collapsed(key);
        next.collapsed.insert(key, flipped);
        next
    }

    pub fn move_panel(&self, key: PanelKey, x: u32, y: u32) -> Self {
        let mut next = self.clone();
        next.panel_positions.insert(key, GridPos { x, y });
        next
    }

    pub fn resize_panel(&self, key: PanelKey, width: u32, height: u32) -> Self {
        let mut next = self.clone();
        next.panel_sizes.insert(key, GridSize { width, height });
        next
    }
}
