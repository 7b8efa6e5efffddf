//! Builds the initial trading-grid layout from access state and device class.

use {
    crate::{
        analysis::permissions::{AccessProfile, PermissionEvaluator},
        config::{DF, GRID, GridConfig, GridPos, GridSize, PanelConfig, TRADING_VIEW_LAYOUT},
        domain::{DeviceClass, SubscriptionTier},
        models::LayoutState,
    },
    serde::{Deserialize, Serialize},
};

/// Inputs to [`initialize_layout`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub profile: AccessProfile,
    pub device: DeviceClass,
}

impl LayoutRequest {
    pub fn new(
        tier: SubscriptionTier,
        rank_id: Option<&str>,
        kyc_completed: bool,
        risk_level: u32,
        device: DeviceClass,
    ) -> Self {
        Self {
            profile: AccessProfile {
                tier,
                rank_id: rank_id.map(str::to_owned),
                kyc_completed,
                risk_level,
            },
            device,
        }
    }
}

/// Panel geometry after the device-class adjustment.
pub fn adjust_for_device(
    panel: &PanelConfig,
    device: DeviceClass,
    grid: &GridConfig,
) -> (GridPos, GridSize) {
    let GridPos { mut x, y } = panel.position;
    let GridSize { mut width, mut height } = panel.default_size();

    match device {
        DeviceClass::Desktop => {}
        DeviceClass::Tablet => {
            width = width.min(grid.tablet_max_width);
            height = height.min(grid.tablet_max_height);
            x %= grid.columns;
        }
        DeviceClass::Mobile => {
            width = grid.columns;
            x = 0;
        }
    }

    (GridPos { x, y }, GridSize { width, height })
}

/// Lays out `panels` for `request`. A panel the caller may not see starts collapsed.
pub fn initialize_with(
    request: &LayoutRequest,
    panels: &[PanelConfig],
    evaluator: &PermissionEvaluator<'_>,
    grid: &GridConfig,
) -> LayoutState {
    let mut state = LayoutState::default();

    for panel in panels {
        let visible = evaluator.evaluate(panel.key.as_ref(), &request.profile);
        let (pos, size) = adjust_for_device(panel, request.device, grid);

        if DF.log_layout {
            log::debug!(
                "{} [{}]: {}x{} @ ({}, {}){}",
                panel.key,
                request.device,
                size.width,
                size.height,
                pos.x,
                pos.y,
                if visible { "" } else { " collapsed" }
            );
        }

        state.collapsed.insert(panel.key, !visible);
        state.panel_positions.insert(panel.key, pos);
        state.panel_sizes.insert(panel.key, size);
    }

    state
}

/// Lays out the standard trading grid using the static rule and panel tables.
pub fn initialize_layout(request: &LayoutRequest) -> LayoutState {
    initialize_with(
        request,
        &TRADING_VIEW_LAYOUT,
        &PermissionEvaluator::default(),
        &GRID,
    )
}
