use {
    crate::{
        config::{DF, PERSISTENCE},
        models::{LayoutState, ReferralTree, SubscriptionState},
        utils::now_timestamp_ms,
    },
    anyhow::{Context, Result, bail},
    serde::{Deserialize, Serialize},
    std::fs::{self, File},
    std::io::{BufReader, BufWriter},
    std::path::Path,
};

/// Everything the dashboard persists between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub version: u32,
    pub saved_at_ms: i64,
    #[serde(default)]
    pub subscription: SubscriptionState,
    #[serde(default)]
    pub referral_tree: ReferralTree,
    #[serde(default)]
    pub layout: Option<LayoutState>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            version: PERSISTENCE.snapshot.version,
            saved_at_ms: 0,
            subscription: SubscriptionState::default(),
            referral_tree: ReferralTree::default(),
            layout: None,
        }
    }
}

// Helper function to create a new file and any missing parent directories.
pub(crate) fn create_file_with_parents(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))
}

/// Writes `snapshot` as JSON, stamping the save time.
pub fn save_snapshot(path: &Path, snapshot: &DashboardSnapshot) -> Result<()> {
    let file = create_file_with_parents(path)?;
    let writer = BufWriter::new(file);

    let stamped = DashboardSnapshot {
        saved_at_ms: now_timestamp_ms(),
        ..snapshot.clone()
    };
    serde_json::to_writer_pretty(writer, &stamped)
        .with_context(|| format!("Failed to serialize snapshot to: {}", path.display()))?;

    if DF.log_storage {
        log::info!(
            "Saved snapshot ({} referral nodes) to {}",
            stamped.referral_tree.len(),
            path.display()
        );
    }
    Ok(())
}

/// Reads a snapshot. A missing file yields the default snapshot.
pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot> {
    if !path.exists() {
        if DF.log_storage {
            log::info!("No snapshot at {}, starting fresh", path.display());
        }
        return Ok(DashboardSnapshot::default());
    }

    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let snapshot: DashboardSnapshot = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize snapshot from: {}", path.display()))?;

    if snapshot.version != PERSISTENCE.snapshot.version {
        bail!(
            "Snapshot version mismatch: file v{} vs required v{}",
            snapshot.version,
            PERSISTENCE.snapshot.version
        );
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{LayoutRequest, initialize_layout},
        domain::SubscriptionTier,
    };

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snap = load_snapshot(&dir.path().join("nope.json")).expect("load");
        assert_eq!(snap, DashboardSnapshot::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("state.json");

        let mut tree = ReferralTree::new();
        tree.register_referral("alice", "bob");
        let snap = DashboardSnapshot {
            subscription: SubscriptionState::free().upgrade(SubscriptionTier::Pro, 42),
            referral_tree: tree,
            layout: Some(initialize_layout(&LayoutRequest::default())),
            ..Default::default()
        };

        save_snapshot(&path, &snap).expect("save");
        let loaded = load_snapshot(&path).expect("load");
        assert!(loaded.saved_at_ms > 0);
        assert_eq!(loaded.subscription, snap.subscription);
        assert_eq!(loaded.referral_tree, snap.referral_tree);
        assert_eq!(loaded.layout, snap.layout);
    }

    #[test]
    fn rejects_other_versions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("old.json");
        std::fs::write(&path, r#"{"version": 999, "saved_at_ms": 0}"#).expect("write");
        assert!(load_snapshot(&path).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").expect("write");
        let err = load_snapshot(&path).expect_err("should fail");
        assert!(format!("{err:#}").contains("Failed to deserialize"));
    }
}
