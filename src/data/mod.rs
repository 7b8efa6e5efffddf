// Explicit persistence. Nothing in `analysis` touches the filesystem.
mod snapshot_io;
mod tree_io;

pub use snapshot_io::{DashboardSnapshot, load_snapshot, save_snapshot};
pub use tree_io::{load_tree, save_tree};
