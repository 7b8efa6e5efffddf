//! File persistence configuration

/// Configuration for dashboard snapshot persistence
pub struct SnapshotPersistenceConfig {
    /// Default path for saving/loading the dashboard snapshot
    pub state_path: &'static str,
    /// Current version of the snapshot format
    pub version: u32,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub snapshot: SnapshotPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    snapshot: SnapshotPersistenceConfig {
        state_path: ".dex_dashboard_state.json",
        version: 1,
    },
};
