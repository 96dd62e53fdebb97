//! Three mutually dependent writers with snapshotting disabled (the default:
//! neither state-equality reduction nor non-termination checking is on),
//! restoring to a backtrack point has nothing to restore from but a fresh
//! start plus replay. Three actors writing the same resource guarantee
//! DPOR wakes up more than one ordering, so the replay path is exercised.

use mc_core::remote::fake::{ActorSpec, FakeRemoteApp};
use mc_core::{ResourceOp, TransitionKind};
use mc_explorer::{DFSExplorer, ExplorerConfig, ReductionMode};

fn three_writers() -> FakeRemoteApp {
    let write_ledger = || TransitionKind::Resource {
        name: "ledger".to_string(),
        op: ResourceOp::Write,
    };
    FakeRemoteApp::builder()
        .actor(ActorSpec::new(1, vec![write_ledger()]))
        .actor(ActorSpec::new(2, vec![write_ledger()]))
        .actor(ActorSpec::new(3, vec![write_ledger()]))
        .build()
}

#[test]
fn backtracking_without_a_snapshot_replays_transitions_from_the_start() {
    let mut app = three_writers();
    let config = ExplorerConfig {
        reduction_mode: ReductionMode::Dpor,
        max_visited_states: 0,
        termination: false,
        ..ExplorerConfig::default()
    };
    assert!(!config.wants_snapshot());

    let mut explorer = DFSExplorer::new(&mut app, config).unwrap();
    let report = explorer.run(&mut app).unwrap();

    assert!(
        report.replayed_transitions > 0,
        "mutually dependent writers must force at least one snapshot-less restore"
    );
}
