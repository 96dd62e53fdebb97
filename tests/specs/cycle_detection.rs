//! A single actor looping through the same two
//! local steps forever is a non-progressive cycle once its state repeats,
//! not an infinite exploration.

use mc_core::remote::fake::{ActorSpec, FakeRemoteApp};
use mc_core::TransitionKind;
use mc_explorer::{DFSExplorer, ExploreError, ExplorerConfig};

#[test]
fn a_repeating_actor_is_reported_as_a_non_progressive_cycle() {
    let mut app = FakeRemoteApp::builder()
        .actor(
            ActorSpec::new(1, vec![TransitionKind::Local, TransitionKind::Local]).repeating(),
        )
        .build();

    let config = ExplorerConfig {
        termination: true,
        ..ExplorerConfig::default()
    };
    let mut explorer = DFSExplorer::new(&mut app, config).unwrap();
    let result = explorer.run(&mut app);

    match result {
        Err(ExploreError::Termination { cycle }) => {
            assert_eq!(cycle.len(), 2, "the cycle is exactly the actor's own loop");
        }
        other => panic!("expected a non-progressive cycle, got {other:?}"),
    }
}
