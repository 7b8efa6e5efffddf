#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{
    AccessProfile, LayoutRequest, PermissionEvaluator, ReferralStats, aggregate, evaluate,
    initialize_layout,
};
pub use app::App;
pub use config::PERSISTENCE;
pub use domain::{DeviceClass, FeatureKey, PanelKey, SubscriptionTier};
pub use models::{LayoutState, ReferralTree, ReferralUserNode, RegistrationOutcome, SubscriptionState};

// CLI argument parsing
use {
    clap::{Args, Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dashboard snapshot to read (and write, for commands that change state)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Access inputs. Anything omitted is taken from the snapshot.
#[derive(Args, Debug, Clone, Default)]
pub struct AccessArgs {
    /// Subscription tier (free, pro, pro_plus, enterprise)
    #[arg(long)]
    pub tier: Option<SubscriptionTier>,

    /// Referral rank id (starter, bronze, silver, gold, platinum)
    #[arg(long)]
    pub rank: Option<String>,

    /// KYC has been completed
    #[arg(long, default_value_t = false)]
    pub kyc: bool,

    #[arg(long, default_value_t = 0)]
    pub risk: u32,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a single feature or panel key
    Permission {
        key: String,
        #[command(flatten)]
        access: AccessArgs,
    },
    /// List every gated key the caller may use
    Features {
        #[command(flatten)]
        access: AccessArgs,
    },
    /// Compute the initial trading-grid layout
    Layout {
        #[command(flatten)]
        access: AccessArgs,
        #[arg(long, default_value_t = DeviceClass::Desktop)]
        device: DeviceClass,
        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Store the computed layout in the snapshot
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    #[command(subcommand)]
    Referral(ReferralCommand),
    #[command(subcommand)]
    Subscription(SubscriptionCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReferralCommand {
    /// Aggregate a referral tree (JSON file, or the snapshot's tree)
    Stats { tree: Option<PathBuf> },
    /// Print the tree with per-node subtree totals
    Show { tree: Option<PathBuf> },
    /// Register `child` under `parent` in a tree file, or in the snapshot's tree
    Register {
        tree: Option<PathBuf>,
        #[arg(long)]
        parent: String,
        #[arg(long)]
        child: String,
        /// Write the updated tree back to the file
        #[arg(long, default_value_t = false, requires = "tree")]
        write: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubscriptionCommand {
    Show,
    /// Switch to a paid tier for `days` days
    Upgrade {
        tier: SubscriptionTier,
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Start a trial of `tier` (defaults to the tier's own trial length)
    Trial {
        tier: SubscriptionTier,
        #[arg(long)]
        days: Option<u32>,
    },
    Cancel,
}

/// Entry point for the binary.
pub fn run_app(args: Cli) -> anyhow::Result<()> {
    App::load(args.state.as_deref())?.run(args.command)
}
