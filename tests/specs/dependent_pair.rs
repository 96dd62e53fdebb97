//! Two actors whose single step each writes the
//! same named resource, so the two orderings do not commute. DPOR must wake
//! up the alternate ordering: two backtracks, both interleavings executed.

use mc_core::remote::fake::{ActorSpec, FakeRemoteApp};
use mc_core::{ActorId, ResourceOp, TransitionKind};
use mc_explorer::{DFSExplorer, ExplorerConfig, ReductionMode};
use std::cell::RefCell;
use std::rc::Rc;

fn dependent_pair() -> FakeRemoteApp {
    let write_counter = || TransitionKind::Resource {
        name: "counter".to_string(),
        op: ResourceOp::Write,
    };
    FakeRemoteApp::builder()
        .actor(ActorSpec::new(1, vec![write_counter()]))
        .actor(ActorSpec::new(2, vec![write_counter()]))
        .build()
}

#[test]
fn wakes_up_the_alternate_ordering_and_explores_both() {
    let mut app = dependent_pair();
    let config = ExplorerConfig {
        reduction_mode: ReductionMode::Dpor,
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
        vec![
            ActorId::new(1),
            ActorId::new(2),
            ActorId::new(2),
            ActorId::new(1),
        ],
        "the dependent pair must be explored in both orders"
    );
    assert_eq!(report.backtrack_count, 2);
    assert_eq!(report.total_visited, 4);
}
