//! With reduction disabled, both orderings of a
//! commuting pair are explored, and the second ordering's final state is
//! recognized as equal to a state already seen, pruning it.

use mc_core::remote::fake::{ActorSpec, FakeRemoteApp};
use mc_core::TransitionKind;
use mc_explorer::{DFSExplorer, ExplorerConfig, ExplorerEvent, ReductionMode};
use std::cell::RefCell;
use std::rc::Rc;

fn commuting_pair() -> FakeRemoteApp {
    FakeRemoteApp::builder()
        .actor(ActorSpec::new(1, vec![TransitionKind::Local]))
        .actor(ActorSpec::new(2, vec![TransitionKind::Local]))
        .build()
}

#[test]
fn the_second_ordering_s_final_state_hits_the_first_ordering_s() {
    let mut app = commuting_pair();
    let config = ExplorerConfig {
        reduction_mode: ReductionMode::None,
        max_visited_states: 10,
        ..ExplorerConfig::default()
    };

    let hits: Rc<RefCell<Vec<(i64, i64)>>> = Rc::new(RefCell::new(Vec::new()));
    let mut explorer = DFSExplorer::new(&mut app, config).unwrap();
    let sink = hits.clone();
    explorer.on_event(move |event| {
        if let ExplorerEvent::VisitedHit { incoming, original } = event {
            sink.borrow_mut().push((incoming.0, original.0));
        }
    });

    let report = explorer.run(&mut app).unwrap();

    let hits = hits.borrow();
    assert_eq!(hits.len(), 1, "exactly one state should be recognized as already visited");
    let (incoming, original) = hits[0];
    assert_ne!(incoming, original, "the hit must be a distinct state number reused");
    assert_eq!(report.backtrack_count, 2);
}
