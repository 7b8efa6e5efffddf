use {
    super::snapshot_io::create_file_with_parents,
    crate::{
        config::{DF, REFERRAL},
        models::{ReferralTree, ReferralUserNode},
    },
    anyhow::{Context, Result},
    std::{
        fs::File,
        io::{BufReader, BufWriter},
        path::Path,
    },
};

/// Reads a nested referral tree file. `null` is an empty tree; a missing file is an error.
pub fn load_tree(path: &Path) -> Result<ReferralTree> {
    let file = File::open(path).with_context(|| format!("Failed to open tree: {}", path.display()))?;
    let root: Option<ReferralUserNode> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse tree: {}", path.display()))?;

    Ok(root
        .map(|r| ReferralTree::from_nested(&r, REFERRAL.tree_max_depth))
        .unwrap_or_default())
}

/// Writes `tree` back in its nested form.
pub fn save_tree(path: &Path, tree: &ReferralTree) -> Result<()> {
    let writer = BufWriter::new(create_file_with_parents(path)?);
    serde_json::to_writer_pretty(writer, tree)
        .with_context(|| format!("Failed to serialize tree to: {}", path.display()))?;

    if DF.log_storage {
        log::info!("Saved referral tree ({} nodes) to {}", tree.len(), path.display());
    }
    Ok(())
}
