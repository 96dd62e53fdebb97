//! Two always-enabled actors with independent transitions, `max_depth=2`,
//! DPOR. Exactly one leaf trace `[1, 2]` (aid-ascending seeding), one
//! backtrack.

use mc_core::remote::fake::{ActorSpec, FakeRemoteApp};
use mc_core::{ActorId, TransitionKind};
use mc_explorer::{DFSExplorer, ExplorerConfig, ReductionMode};
use std::cell::RefCell;
use std::rc::Rc;

fn commuting_pair() -> FakeRemoteApp {
    FakeRemoteApp::builder()
        .actor(ActorSpec::new(1, vec![TransitionKind::Local]))
        .actor(ActorSpec::new(2, vec![TransitionKind::Local]))
        .build()
}

#[test]
fn explores_exactly_one_leaf_trace_with_one_backtrack() {
    let mut app = commuting_pair();
    let config = ExplorerConfig {
        reduction_mode: ReductionMode::Dpor,
        max_depth: 2,
        ..ExplorerConfig::default()
    };

    let executed: Rc<RefCell<Vec<ActorId>>> = Rc::new(RefCell::new(Vec::new()));
    let mut explorer = DFSExplorer::new(&mut app, config).unwrap();
    let sink = executed.clone();
    explorer.on_event(move |event| {
        if let mc_explorer::ExplorerEvent::TransitionExecute { aid, .. } = event {
            sink.borrow_mut().push(*aid);
        }
    });

    let report = explorer.run(&mut app).unwrap();

    assert_eq!(
        *executed.borrow(),
        vec![ActorId::new(1), ActorId::new(2)],
        "independent transitions must not wake up the alternate ordering"
    );
    assert_eq!(report.backtrack_count, 1);
    assert_eq!(report.total_visited, 2);
    similar_asserts::assert_eq!(
        report.to_string(),
        "3 unique states, 1 backtracks, 0 replayed transitions, 2 total visited"
    );
}
