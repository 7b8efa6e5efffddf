use {
    anyhow::Result,
    std::path::{Path, PathBuf},
};

use crate::{
    AccessArgs, Command, ReferralCommand, SubscriptionCommand,
    analysis::{
        AccessProfile, LayoutRequest, PermissionEvaluator, ReferralStats, aggregate,
        initialize_layout,
    },
    config::{PERSISTENCE, SUBSCRIPTION},
    data::{DashboardSnapshot, load_snapshot, load_tree, save_snapshot, save_tree},
    models::ReferralTree,
    ui::report,
    utils::{TimeUtils, now_timestamp_ms},
};

/// Command runner over one loaded dashboard snapshot.
pub struct App {
    state_path: PathBuf,
    snapshot: DashboardSnapshot,
    now_ms: i64,
}

impl App {
    pub fn load(state_path: Option<&Path>) -> Result<Self> {
        let state_path = state_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(PERSISTENCE.snapshot.state_path));
        let now_ms = now_timestamp_ms();

        let mut snapshot = load_snapshot(&state_path)?;
        snapshot.subscription = snapshot.subscription.refresh(now_ms);

        Ok(Self {
            state_path,
            snapshot,
            now_ms,
        })
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    fn save(&self) -> Result<()> {
        save_snapshot(&self.state_path, &self.snapshot)
    }

    /// Fills what the caller left out from the snapshot: the active tier and the rank the
    /// stored referral tree earns. A rank handed out by the fallback policy is not inherited.
    pub fn access_profile(&self, args: &AccessArgs) -> AccessProfile {
        let tier = args
            .tier
            .unwrap_or_else(|| self.snapshot.subscription.effective_tier());
        let rank_id = args.rank.clone().or_else(|| {
            aggregate(&self.snapshot.referral_tree)
                .filter(ReferralStats::rank_earned)
                .map(|stats| stats.rank.id.to_string())
        });

        AccessProfile {
            tier,
            rank_id,
            kyc_completed: args.kyc,
            risk_level: args.risk,
        }
    }

    fn tree_from(&self, path: Option<&Path>) -> Result<ReferralTree> {
        match path {
            Some(path) => load_tree(path),
            None => Ok(self.snapshot.referral_tree.clone()),
        }
    }

    pub fn run(mut self, command: Command) -> Result<()> {
        match command {
            Command::Permission { key, access } => {
                let profile = self.access_profile(&access);
                let denial = PermissionEvaluator::default().denial_reason(&key, &profile);
                println!("{}", report::permission_line(&key, &profile, denial));
            }

            Command::Features { access } => {
                let profile = self.access_profile(&access);
                let keys = PermissionEvaluator::default().allowed_keys(&profile);
                println!("{}", report::allowed_keys(&profile, &keys));
            }

            Command::Layout {
                access,
                device,
                json,
                save,
            } => {
                let request = LayoutRequest {
                    profile: self.access_profile(&access),
                    device,
                };
                let layout = initialize_layout(&request);
                if json {
                    println!("{}", serde_json::to_string_pretty(&layout)?);
                } else {
                    println!("{}", report::layout_table(&layout));
                }
                if save {
                    self.snapshot.layout = Some(layout);
                    self.save()?;
                }
            }

            Command::Referral(ReferralCommand::Stats { tree }) => {
                let tree = self.tree_from(tree.as_deref())?;
                println!("{}", report::referral_stats(aggregate(&tree).as_ref()));
            }

            Command::Referral(ReferralCommand::Show { tree }) => {
                let tree = self.tree_from(tree.as_deref())?;
                println!("{}", report::tree_outline(&tree));
            }

            Command::Referral(ReferralCommand::Register {
                tree: Some(path),
                parent,
                child,
                write,
            }) => {
                let mut tree = load_tree(&path)?;
                let outcome = tree.register_referral(&parent, &child);
                println!("{}", report::registration_line(&parent, &child, &outcome));
                if write && outcome.is_registered() {
                    save_tree(&path, &tree)?;
                }
            }

            Command::Referral(ReferralCommand::Register {
                tree: None,
                parent,
                child,
                ..
            }) => {
                let outcome = self.snapshot.referral_tree.register_referral(&parent, &child);
                println!("{}", report::registration_line(&parent, &child, &outcome));
                if outcome.is_registered() {
                    self.save()?;
                }
            }

            Command::Subscription(cmd) => {
                let current = &self.snapshot.subscription;
                let next = match cmd {
                    SubscriptionCommand::Show => None,
                    SubscriptionCommand::Upgrade { tier, days } => Some(current.upgrade(
                        tier,
                        self.now_ms + i64::from(days) * TimeUtils::MS_IN_D,
                    )),
                    SubscriptionCommand::Trial { tier, days } => {
                        let token = SUBSCRIPTION.token(tier);
                        let days = days.or(token.pricing.trial_days).unwrap_or(0);
                        Some(current.start_trial(tier, days, self.now_ms))
                    }
                    SubscriptionCommand::Cancel => Some(current.cancel()),
                };
                if let Some(next) = next {
                    self.snapshot.subscription = next;
                    self.save()?;
                }
                println!(
                    "{}",
                    report::subscription_summary(&self.snapshot.subscription, self.now_ms)
                );
            }
        }

        Ok(())
    }
}
