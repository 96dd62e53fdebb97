// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mc_core::{ActorId, RemoteApp};

#[test]
fn demo_app_runs_to_quiescence_in_some_order() {
    let mut app = build();
    for aid in [1, 2, 1, 2] {
        let _ = app.execute(ActorId::new(aid), 0);
    }
    assert!(app.get_actors().unwrap().is_empty());
}
