// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide (but explicitly handed-down, not global) exploration counters.
//!
//! The engine is single-threaded and strictly sequential (see the
//! concurrency model), so a `Cell` is enough; there is no need for atomics.

use std::cell::Cell;

/// Monotonic counters shared by the explorer, states, and transitions for
/// reporting. Cheap to clone: all fields are reference-counted internally
/// via interior mutability on a single owner, so a `Counters` is normally
/// held by the `DFSExplorer` and passed down by reference.
#[derive(Debug, Default)]
pub struct Counters {
    next_state_num: Cell<i64>,
    expanded_states: Cell<u64>,
    visited_states: Cell<u64>,
    replayed_transitions: Cell<u64>,
    executed_transitions: Cell<u64>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next monotonically increasing state number.
    pub fn next_state_num(&self) -> i64 {
        let n = self.next_state_num.get();
        self.next_state_num.set(n + 1);
        n
    }

    /// Record that a brand-new (unique) state was expanded.
    pub fn inc_expanded_states(&self) {
        self.expanded_states.set(self.expanded_states.get() + 1);
    }

    pub fn expanded_states(&self) -> u64 {
        self.expanded_states.get()
    }

    /// Record one more state having been visited overall (executed or replayed).
    pub fn inc_visited_states(&self) {
        self.visited_states.set(self.visited_states.get() + 1);
    }

    pub fn visited_states(&self) -> u64 {
        self.visited_states.get()
    }

    pub fn inc_replayed_transitions(&self) {
        self.replayed_transitions
            .set(self.replayed_transitions.get() + 1);
    }

    pub fn replayed_transitions(&self) -> u64 {
        self.replayed_transitions.get()
    }

    pub fn inc_executed_transitions(&self) {
        self.executed_transitions
            .set(self.executed_transitions.get() + 1);
    }

    pub fn executed_transitions(&self) -> u64 {
        self.executed_transitions.get()
    }
}

#[cfg(test)]
#[path = "counters_tests.rs"]
mod tests;
