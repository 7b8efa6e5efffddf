//! End-to-end runs of the command layer against a temporary snapshot.

use dex_dashboard::{
    AccessArgs, App, Command, DeviceClass, PanelKey, ReferralCommand, ReferralTree,
    ReferralUserNode, SubscriptionCommand, SubscriptionTier,
};

fn app_at(path: &std::path::Path) -> App {
    App::load(Some(path)).expect("load snapshot")
}

#[test]
fn registrations_persist_between_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    for (parent, child) in [("alice", "bob"), ("bob", "carol"), ("ghost", "dave")] {
        app_at(&path)
            .run(Command::Referral(ReferralCommand::Register {
                tree: None,
                parent: parent.into(),
                child: child.into(),
                write: false,
            }))
            .expect("register");
    }

    let app = app_at(&path);
    let tree = &app.snapshot().referral_tree;
    assert_eq!(tree.len(), 3);
    assert!(tree.find("carol").is_some());
    assert!(tree.find("dave").is_none());
}

#[test]
fn access_defaults_come_from_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    app_at(&path)
        .run(Command::Subscription(SubscriptionCommand::Upgrade {
            tier: SubscriptionTier::ProPlus,
            days: 30,
        }))
        .expect("upgrade");

    let app = app_at(&path);
    let profile = app.access_profile(&AccessArgs::default());
    assert_eq!(profile.tier, SubscriptionTier::ProPlus);
    // No tree stored, so no rank to inherit.
    assert_eq!(profile.rank_id, None);

    let explicit = app.access_profile(&AccessArgs {
        tier: Some(SubscriptionTier::Free),
        rank: Some("gold".into()),
        ..Default::default()
    });
    assert_eq!(explicit.tier, SubscriptionTier::Free);
    assert_eq!(explicit.rank_id.as_deref(), Some("gold"));
}

#[test]
fn saved_layout_is_reloaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    app_at(&path)
        .run(Command::Layout {
            access: AccessArgs::default(),
            device: DeviceClass::Mobile,
            json: true,
            save: true,
        })
        .expect("layout");

    let app = app_at(&path);
    let layout = app.snapshot().layout.clone().expect("layout saved");
    assert_eq!(layout.size(PanelKey::Chart).map(|s| s.width), Some(12));
    assert!(layout.is_collapsed(PanelKey::ReferralDashboard));
}

#[test]
fn cancel_returns_to_free() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    app_at(&path)
        .run(Command::Subscription(SubscriptionCommand::Trial {
            tier: SubscriptionTier::Pro,
            days: None,
        }))
        .expect("trial");
    assert!(app_at(&path).snapshot().subscription.is_trial);

    app_at(&path)
        .run(Command::Subscription(SubscriptionCommand::Cancel))
        .expect("cancel");
    assert_eq!(
        app_at(&path).snapshot().subscription.tier,
        SubscriptionTier::Free
    );
}

fn register_in_file(state: &std::path::Path, tree: &std::path::Path, child: &str, write: bool) {
    app_at(state)
        .run(Command::Referral(ReferralCommand::Register {
            tree: Some(tree.to_path_buf()),
            parent: "root".into(),
            child: child.into(),
            write,
        }))
        .expect("register in file");
}

#[test]
fn tree_file_is_rewritten_only_with_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    let tree_path = dir.path().join("tree.json");
    let root = ReferralUserNode::new("root", 1_000.0, 10.0);
    std::fs::write(&tree_path, serde_json::to_string(&root).expect("json")).expect("write");

    register_in_file(&state, &tree_path, "dry", false);
    let on_disk: ReferralTree =
        serde_json::from_str(&std::fs::read_to_string(&tree_path).expect("read")).expect("parse");
    assert_eq!(on_disk.len(), 1);

    register_in_file(&state, &tree_path, "kept", true);
    let on_disk: ReferralTree =
        serde_json::from_str(&std::fs::read_to_string(&tree_path).expect("read")).expect("parse");
    assert_eq!(on_disk.len(), 2);
    assert!(on_disk.find("kept").is_some());
    assert!(on_disk.find("dry").is_none());

    // The snapshot's own tree is untouched by file registrations.
    assert!(app_at(&state).snapshot().referral_tree.is_empty());
}

#[test]
fn unearned_rank_is_not_inherited() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    app_at(&path)
        .run(Command::Referral(ReferralCommand::Register {
            tree: None,
            parent: "alice".into(),
            child: "bob".into(),
            write: false,
        }))
        .expect("register");

    // One zero-volume referral meets no rank threshold.
    let app = app_at(&path);
    let profile = app.access_profile(&AccessArgs::default());
    assert_eq!(profile.rank_id, None);

    let layout = dex_dashboard::initialize_layout(&dex_dashboard::LayoutRequest {
        profile,
        device: DeviceClass::Desktop,
    });
    assert!(layout.is_collapsed(PanelKey::ReferralDashboard));
}

#[test]
fn lapsed_trial_gates_as_free() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    app_at(&path)
        .run(Command::Subscription(SubscriptionCommand::Trial {
            tier: SubscriptionTier::ProPlus,
            days: Some(0),
        }))
        .expect("trial");

    // A zero-day trial has already ended by the next load.
    let profile = app_at(&path).access_profile(&AccessArgs::default());
    assert_eq!(profile.tier, SubscriptionTier::Free);
}
