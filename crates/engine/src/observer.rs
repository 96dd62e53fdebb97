// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer hooks: one typed event enum and a vector of subscriber
//! callbacks registered via `DFSExplorer::on_event`, covering state
//! creation, transition execution, backtracking, restoration, replay, and
//! visited-state hits.
//!
//! Observers are pure with respect to exploration state: events carry
//! owned, already-rendered data, never a live reference into the stack, so
//! there is nothing for a subscriber to mutate even by accident.

use mc_core::{ActorId, StateNum};

#[derive(Debug, Clone)]
pub enum ExplorerEvent {
    ExplorationStart,
    StateCreation { num: StateNum, actor_count: usize },
    TransitionExecute { from: StateNum, aid: ActorId, label: String },
    Backtracking { depth: usize },
    RestoreSystemState { num: StateNum },
    RestoreInitialState,
    TransitionReplay { aid: ActorId, label: String },
    VisitedHit { incoming: StateNum, original: StateNum },
    LogState { num: StateNum },
}
