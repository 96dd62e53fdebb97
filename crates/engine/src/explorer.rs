// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `DFSExplorer`: owns the search stack, drives forward exploration,
//! implements DPOR-aware backtracking, non-termination detection, and
//! state restoration.
//!
//! The design mandates an explicit stack rather than recursion: recursion
//! would couple search depth to native stack size and preclude mid-search
//! introspection for tooling.

use crate::config::{ExplorerConfig, ReductionMode};
use crate::dot::DotSink;
use crate::error::ExploreError;
use crate::observer::ExplorerEvent;
use crate::report::ExplorationReport;
use mc_core::{ActorDescriptor, ActorId, Counters, RemoteApp, Snapshot, State};
use mc_visited::VisitedStates;
use std::cell::Cell;

/// Owns the search stack and drives one exploration run to completion.
///
/// Generic over the snapshot type rather than the `RemoteApp` implementation
/// itself: `RemoteApp` is always passed explicitly into `new`/`run`, never
/// stored, favoring an explicit handle over a singleton.
pub struct DFSExplorer<Snap: Snapshot> {
    stack: Vec<State<Snap>>,
    config: ExplorerConfig,
    effective_reduction_mode: ReductionMode,
    counters: Counters,
    visited: Option<VisitedStates<Snap>>,
    pending_visited_hit: bool,
    backtrack_count: Cell<u64>,
    dot: Option<DotSink>,
    observers: Vec<Box<dyn FnMut(&ExplorerEvent)>>,
}

impl<Snap: Snapshot> DFSExplorer<Snap> {
    /// Create the initial state from a fresh `RemoteApp` and seed its
    /// `todo` set: the first enabled actor only in DPOR mode, every enabled
    /// actor in `None` mode.
    pub fn new<R>(remote: &mut R, config: ExplorerConfig) -> Result<Self, ExploreError>
    where
        R: RemoteApp<Snapshot = Snap>,
    {
        let effective_reduction_mode = config.effective_reduction_mode();
        if config.termination && config.reduction_mode == ReductionMode::Dpor {
            tracing::warn!(
                "non-termination checking forces reduction_mode=None; DPOR was requested"
            );
        }

        let visited = (config.max_visited_states > 0)
            .then(|| VisitedStates::new(config.max_visited_states));

        let counters = Counters::new();
        let take_snapshot = config.wants_snapshot();
        let mut initial = State::new(remote, &counters, take_snapshot)?;

        let mut explorer = Self {
            stack: Vec::new(),
            config,
            effective_reduction_mode,
            counters,
            visited,
            pending_visited_hit: false,
            backtrack_count: Cell::new(0),
            dot: None,
            observers: Vec::new(),
        };

        explorer.emit(ExplorerEvent::StateCreation {
            num: initial.num(),
            actor_count: initial.actor_count(),
        });
        seed_todo(&mut initial, explorer.effective_reduction_mode);
        explorer.stack.push(initial);
        Ok(explorer)
    }

    /// Register an observer callback. Observers see owned, already
    /// rendered event data (never a live reference into the stack) and
    /// cannot mutate exploration state.
    pub fn on_event(&mut self, callback: impl FnMut(&ExplorerEvent) + 'static) {
        self.observers.push(Box::new(callback));
    }

    pub fn set_dot_sink(&mut self, sink: DotSink) {
        self.dot = Some(sink);
    }

    pub fn backtrack_count(&self) -> u64 {
        self.backtrack_count.get()
    }

    fn emit(&mut self, event: ExplorerEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Run the main loop to completion: a safety violation, a deadlock, a
    /// non-progressive cycle, or a fatal remote-app failure all end the run
    /// early; otherwise it ends when the stack empties.
    pub fn run<R>(&mut self, remote: &mut R) -> Result<ExplorationReport, ExploreError>
    where
        R: RemoteApp<Snapshot = Snap>,
    {
        self.emit(ExplorerEvent::ExplorationStart);

        loop {
            // 1. Depth cap.
            if self.stack.len() > self.config.max_depth {
                if self.effective_reduction_mode == ReductionMode::Dpor {
                    tracing::error!(
                        depth = self.stack.len(),
                        "depth cap exceeded under DPOR; reduction may be unsound past this point"
                    );
                } else {
                    tracing::warn!(depth = self.stack.len(), "depth cap exceeded");
                }
                self.backtrack(remote)?;
                continue;
            }

            // 2. Visited-state pruning deferred from the previous iteration.
            if self.pending_visited_hit {
                self.pending_visited_hit = false;
                self.backtrack(remote)?;
                continue;
            }

            // 3. Choose next, or finish once the stack is empty.
            let Some(top) = self.stack.last_mut() else {
                break;
            };
            let next = top.next_transition();
            let aid = match next {
                Some(aid) => aid,
                None => {
                    if top.actor_count() == 0 {
                        let num = top.num();
                        remote.finalize_app()?;
                        tracing::info!(state = %num, "app ran to quiescence");
                    }
                    self.backtrack(remote)?;
                    continue;
                }
            };

            // 4. Execute.
            let from_num = top.num();
            let label = top.execute_next(remote, aid, &self.counters)?;
            self.emit(ExplorerEvent::TransitionExecute {
                from: from_num,
                aid,
                label: label.clone(),
            });

            // 5. Construct successor.
            let take_snapshot = self.config.wants_snapshot();
            let mut successor = State::new(remote, &self.counters, take_snapshot)?;
            self.emit(ExplorerEvent::StateCreation {
                num: successor.num(),
                actor_count: successor.actor_count(),
            });

            if self.config.termination {
                if let Some(cycle) = self.find_non_progressive_cycle(&successor) {
                    return Err(ExploreError::Termination { cycle });
                }
            }

            let mut hit_num = None;
            if let Some(visited) = &mut self.visited {
                if let Some(snap) = successor.system_state().cloned() {
                    let hit = visited.add(
                        successor.num(),
                        snap,
                        successor.actor_count(),
                        successor.heap_bytes_used(),
                    );
                    if let Some(hit) = hit {
                        self.pending_visited_hit = true;
                        hit_num = Some(hit.original_num);
                        self.emit(ExplorerEvent::VisitedHit {
                            incoming: successor.num(),
                            original: hit.original_num,
                        });
                    }
                }
            }

            if let Some(dot) = &mut self.dot {
                let dst = hit_num.unwrap_or(successor.num());
                let _ = dot.write_edge(from_num, dst, &label);
            }

            // 6. Seed successor's todo, unless it was a visited-state hit.
            if !self.pending_visited_hit {
                seed_todo(&mut successor, self.effective_reduction_mode);
            }

            // 7. Push and continue.
            self.stack.push(successor);
        }

        Ok(self.report())
    }

    /// Walk the stack top-down; if any ancestor's snapshot equals the
    /// candidate's, the path is a non-progressive cycle. The trace is every
    /// transition from the ancestor up to (and including) the current top,
    /// textually rendered.
    fn find_non_progressive_cycle(&self, candidate: &State<Snap>) -> Option<Vec<String>> {
        let candidate_snap = candidate.system_state()?;
        let ancestor_idx = self
            .stack
            .iter()
            .rposition(|s| s.system_state().is_some_and(|snap| snap.equal(candidate_snap)))?;

        let trace = self.stack[ancestor_idx..]
            .iter()
            .filter_map(|s| s.get_transition())
            .map(|t| format!("{}: {}", t.aid, t))
            .collect();
        Some(trace)
    }

    /// Pops the top state, checks for deadlock, then unwinds computing DPOR
    /// wake-ups until it finds the next branching point (or the stack
    /// empties).
    fn backtrack<R>(&mut self, remote: &mut R) -> Result<(), ExploreError>
    where
        R: RemoteApp<Snapshot = Snap>,
    {
        self.backtrack_count.set(self.backtrack_count.get() + 1);
        self.emit(ExplorerEvent::Backtracking {
            depth: self.stack.len(),
        });

        self.stack.pop();
        remote.check_deadlock()?;

        loop {
            let mut q = match self.stack.pop() {
                Some(q) => q,
                None => return Ok(()),
            };

            if self.effective_reduction_mode == ReductionMode::Dpor {
                if let Some(q_transition) = q.get_transition().cloned() {
                    for r in self.stack.iter_mut().rev() {
                        let Some(r_transition) = r.get_transition() else {
                            continue;
                        };
                        if r_transition.aid == q_transition.aid {
                            break;
                        }
                        if r_transition.depends(&q_transition) {
                            if !r.is_done(q_transition.aid) {
                                r.mark_todo(q_transition.aid);
                            }
                            break;
                        }
                    }
                }
            }

            if q.count_todo() > 0 && self.stack.len() < self.config.max_depth {
                self.stack.push(q);
                self.restore_state(remote)?;
                return Ok(());
            }
        }
    }

    /// Restore by snapshot if the new top has one, otherwise rewind to the
    /// fresh-start state and replay every transition below the top.
    fn restore_state<R>(&mut self, remote: &mut R) -> Result<(), ExploreError>
    where
        R: RemoteApp<Snapshot = Snap>,
    {
        let Some(top) = self.stack.last() else {
            return Ok(());
        };
        let top_num = top.num();
        let snapshot = top.system_state().cloned();

        if let Some(snapshot) = snapshot {
            remote.restore(&snapshot)?;
            self.emit(ExplorerEvent::RestoreSystemState { num: top_num });
            return Ok(());
        }

        remote.restore_initial_state()?;
        self.emit(ExplorerEvent::RestoreInitialState);

        let below_top = self.stack.len() - 1;
        for state in &self.stack[..below_top] {
            if let Some(transition) = state.get_transition() {
                remote.replay(transition)?;
                self.counters.inc_replayed_transitions();
                self.counters.inc_visited_states();
                self.emit(ExplorerEvent::TransitionReplay {
                    aid: transition.aid,
                    label: transition.dot_label(),
                });
            }
        }
        Ok(())
    }

    fn report(&self) -> ExplorationReport {
        ExplorationReport {
            unique_states: self.counters.expanded_states(),
            backtrack_count: self.backtrack_count.get(),
            replayed_transitions: self.counters.replayed_transitions(),
            total_visited: self.counters.visited_states(),
        }
    }
}

/// Ascending-aid actor iteration seeds `todo`: every enabled actor in
/// `None` mode, only the first enabled actor in `Dpor` mode
/// (`State::actors()` already iterates a `BTreeMap`, so this is ascending
/// for free).
fn seed_todo<Snap: Snapshot>(state: &mut State<Snap>, mode: ReductionMode) {
    let enabled: Vec<ActorId> = state
        .actors()
        .filter(|(_, desc): &(ActorId, ActorDescriptor)| desc.enabled)
        .map(|(aid, _)| aid)
        .collect();
    match mode {
        ReductionMode::Dpor => {
            if let Some(&aid) = enabled.first() {
                state.mark_todo(aid);
            }
        }
        ReductionMode::None => {
            for aid in enabled {
                state.mark_todo(aid);
            }
        }
    }
}

#[cfg(test)]
#[path = "explorer_tests.rs"]
mod tests;
