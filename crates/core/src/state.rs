// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single node on the DFS search stack.

use crate::{ActorDescriptor, ActorId, Counters, RemoteApp, RemoteAppError, Snapshot, Transition};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Monotonically increasing state identifier, assigned from a process-wide
/// counter. Used only for logging and equality-hit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateNum(pub i64);

impl StateNum {
    pub fn new(n: i64) -> Self {
        Self(n)
    }
}

impl fmt::Display for StateNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node on the DFS stack: the actor set at this depth, the DPOR
/// `todo`/`done` bookkeeping, the outgoing transition once chosen, and an
/// optional full-system snapshot captured the instant this state was
/// created.
#[derive(Debug)]
pub struct State<Snap: Snapshot> {
    num: StateNum,
    actors: BTreeMap<ActorId, ActorDescriptor>,
    todo: BTreeSet<ActorId>,
    done: BTreeSet<ActorId>,
    transition: Option<Transition>,
    system_state: Option<Snap>,
    actor_count: usize,
    heap_bytes_used: usize,
}

impl<Snap: Snapshot> State<Snap> {
    /// Create a new state from the app's current actor set. Captures a
    /// snapshot first, before any outgoing transition is chosen, iff
    /// `take_snapshot` is set (invariant 3 in the data model).
    pub fn new<R>(
        remote: &mut R,
        counters: &Counters,
        take_snapshot: bool,
    ) -> Result<Self, RemoteAppError>
    where
        R: RemoteApp<Snapshot = Snap>,
    {
        let actors_list = remote.get_actors()?;
        let num = StateNum::new(counters.next_state_num());
        let system_state = if take_snapshot {
            Some(remote.take_snapshot(num)?)
        } else {
            None
        };
        let heap_bytes_used = remote.heap_bytes_used()?;
        counters.inc_expanded_states();

        Ok(Self {
            num,
            actor_count: actors_list.len(),
            actors: actors_list.into_iter().collect(),
            todo: BTreeSet::new(),
            done: BTreeSet::new(),
            transition: None,
            system_state,
            heap_bytes_used,
        })
    }

    pub fn num(&self) -> StateNum {
        self.num
    }

    pub fn actor_count(&self) -> usize {
        self.actor_count
    }

    pub fn heap_bytes_used(&self) -> usize {
        self.heap_bytes_used
    }

    pub fn actors(&self) -> impl Iterator<Item = (ActorId, ActorDescriptor)> + '_ {
        self.actors.iter().map(|(&aid, &desc)| (aid, desc))
    }

    pub fn is_actor_enabled(&self, aid: ActorId) -> bool {
        self.actors.get(&aid).is_some_and(|d| d.enabled)
    }

    pub fn is_done(&self, aid: ActorId) -> bool {
        self.done.contains(&aid)
    }

    /// Whether `aid` is currently flagged for future exploration from this
    /// state. Disjoint from `is_done` by construction (invariant 1).
    pub fn is_todo(&self, aid: ActorId) -> bool {
        self.todo.contains(&aid)
    }

    pub fn count_todo(&self) -> usize {
        self.todo.len()
    }

    pub fn system_state(&self) -> Option<&Snap> {
        self.system_state.as_ref()
    }

    pub fn get_transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Add `aid` to `todo` unless it is already in `done` (invariant 1).
    pub fn mark_todo(&mut self, aid: ActorId) {
        if !self.done.contains(&aid) {
            self.todo.insert(aid);
        }
    }

    /// Return the ascending-aid next candidate from `todo`, without
    /// mutating `done`; `None` when `todo` is empty.
    pub fn next_transition(&self) -> Option<ActorId> {
        self.todo.iter().next().copied()
    }

    /// Ask `remote` to execute `aid`, store the returned transition, and
    /// move `aid` from `todo` to `done` (invariant 2). Returns the new
    /// transition's dot label, so callers don't need to re-fetch it.
    pub fn execute_next<R>(
        &mut self,
        remote: &mut R,
        aid: ActorId,
        counters: &Counters,
    ) -> Result<String, RemoteAppError>
    where
        R: RemoteApp<Snapshot = Snap>,
    {
        let times_considered = self.actors.get(&aid).map(|d| d.max_considered).unwrap_or(0);
        let transition = remote.execute(aid, times_considered)?;
        counters.inc_executed_transitions();
        counters.inc_visited_states();
        let label = transition.dot_label();
        self.todo.remove(&aid);
        self.done.insert(aid);
        self.transition = Some(transition);
        Ok(label)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
