//! An actor left permanently stuck behind an
//! unreachable gate is reported as a deadlock, not mistaken for quiescence.

use mc_core::remote::fake::{ActorSpec, FakeRemoteApp};
use mc_explorer::{DFSExplorer, ExploreError, ExplorerConfig};
use mc_core::TransitionKind;

#[test]
fn stuck_actor_behind_unreachable_gate_is_reported_as_deadlock() {
    // A runs once; B's first step needs A>=1 (satisfied), its second needs
    // A>=2, which A never reaches, so B is permanently stuck after one step.
    let mut app = FakeRemoteApp::builder()
        .actor(ActorSpec::new(1, vec![TransitionKind::Local]))
        .actor(
            ActorSpec::new(2, vec![TransitionKind::Local, TransitionKind::Local])
                .requiring(0, 1, 1)
                .requiring(1, 1, 2),
        )
        .build();

    let config = ExplorerConfig::default();
    let mut explorer = DFSExplorer::new(&mut app, config).unwrap();
    let result = explorer.run(&mut app);

    assert!(matches!(result, Err(ExploreError::Deadlock)));
}
