// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The RemoteApp contract: the only protocol the explorer needs from the
//! out-of-process app-under-check, plus the opaque, equality-comparable
//! snapshot handle it can optionally hand back.
//!
//! Concrete transports (launching and talking to a real external process)
//! are an external collaborator per the exploration engine's scope; this
//! module defines the trait and a simple in-process [`fake::FakeRemoteApp`]
//! used to exercise the explorer in tests, the same way `oj-core::clock`
//! pairs the `Clock` trait with a `FakeClock` alongside `SystemClock`.

use crate::{ActorDescriptor, ActorId, StateNum, Transition};
use std::fmt;
use thiserror::Error;

/// Errors a `RemoteApp` call can fail with. All are fatal to the current
/// exploration path; the explorer surfaces them per the error taxonomy.
#[derive(Debug, Error)]
pub enum RemoteAppError {
    #[error("deadlock: no actor is enabled")]
    Deadlock,
    /// The app reported that a safety property failed at the current step.
    /// Distinct from [`RemoteAppError::Failure`]: the app is still alive and
    /// responsive, it is telling the explorer the property under check does
    /// not hold here.
    #[error("safety violation: {0}")]
    SafetyViolation(String),
    #[error("remote app failure: {0}")]
    Failure(String),
    #[error("protocol error talking to remote app: {0}")]
    Protocol(String),
}

/// An opaque, equality-comparable full-system snapshot handle.
///
/// Byte-level page comparison is the snapshot subsystem's job and is out of
/// scope here; implementors only need `equal` to be reflexive, symmetric,
/// and transitive over whatever internal representation they choose.
pub trait Snapshot: fmt::Debug + Clone {
    fn equal(&self, other: &Self) -> bool;
}

/// Single-owner handle to the app-under-check.
///
/// All operations are synchronous and blocking from the caller's
/// perspective: the engine is single-threaded and strictly sequential, so
/// there is no internal asynchrony to hide behind an `async fn` here.
pub trait RemoteApp {
    type Snapshot: Snapshot;

    /// The current enabled/disabled actor set, in the order the app reports
    /// it. Actors that have permanently finished are simply absent.
    fn get_actors(&mut self) -> Result<Vec<(ActorId, ActorDescriptor)>, RemoteAppError>;

    /// Bytes currently used on the app's heap, for visited-state ordering.
    fn heap_bytes_used(&mut self) -> Result<usize, RemoteAppError>;

    /// Run one simcall of `aid` (its `times_considered`-th variant).
    /// Blocks until the app has stepped; advances the app's state.
    fn execute(&mut self, aid: ActorId, times_considered: u32)
        -> Result<Transition, RemoteAppError>;

    /// Ask the app whether the current state has any enabled actor. Fails
    /// with [`RemoteAppError::Deadlock`] if there is at least one live actor
    /// and none of them are enabled. An empty actor set (the app chose to
    /// terminate) is not a deadlock.
    fn check_deadlock(&mut self) -> Result<(), RemoteAppError>;

    /// Capture the app's full memory image as of right now.
    fn take_snapshot(&mut self, state_num: StateNum) -> Result<Self::Snapshot, RemoteAppError>;

    /// Restore the app to exactly the state at which `snapshot` was taken.
    fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<(), RemoteAppError>;

    /// Rewind the app to its fresh-start state.
    fn restore_initial_state(&mut self) -> Result<(), RemoteAppError>;

    /// Ask the app to re-execute `transition` from its current position.
    fn replay(&mut self, transition: &Transition) -> Result<(), RemoteAppError>;

    /// Signal that the current execution path has reached a natural end.
    fn finalize_app(&mut self) -> Result<(), RemoteAppError>;
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake {
    //! A small in-process toy concurrent app, used to drive the explorer in
    //! tests without a real external process. Each actor runs a fixed
    //! script of [`TransitionKind`] steps; a step may be gated on another
    //! actor having reached a given progress count, which is enough to
    //! construct every scenario in the exploration engine's test suite
    //! (commuting/dependent pairs, deadlocks, non-progressive cycles,
    //! visited-state hits, and snapshot-less replay).

    use super::*;
    use crate::TransitionKind;
    use std::collections::BTreeMap;

    /// One actor's fixed program.
    #[derive(Debug, Clone)]
    pub struct ActorSpec {
        pub aid: ActorId,
        pub steps: Vec<TransitionKind>,
        /// Per-step gate: `requires[i] = Some((other, n))` means step `i`
        /// only becomes enabled once `other`'s progress has reached `n`.
        pub requires: Vec<Option<(ActorId, usize)>>,
        /// If true, progress wraps back to 0 after the last step instead of
        /// marking the actor as finished (models an infinite loop).
        pub repeat: bool,
        /// Steps that, once reached, make `execute` fail with
        /// [`RemoteAppError::SafetyViolation`] instead of stepping.
        pub violations: Vec<bool>,
    }

    impl ActorSpec {
        pub fn new(aid: i64, steps: Vec<TransitionKind>) -> Self {
            let requires = vec![None; steps.len()];
            let violations = vec![false; steps.len()];
            Self {
                aid: ActorId::new(aid),
                steps,
                requires,
                repeat: false,
                violations,
            }
        }

        pub fn requiring(mut self, step: usize, other: i64, count: usize) -> Self {
            self.requires[step] = Some((ActorId::new(other), count));
            self
        }

        pub fn repeating(mut self) -> Self {
            self.repeat = true;
            self
        }

        /// Mark `step` as violating the safety property under check: once
        /// reached, `execute` fails instead of stepping.
        pub fn violating(mut self, step: usize) -> Self {
            self.violations[step] = true;
            self
        }
    }

    /// Snapshot of a [`FakeRemoteApp`]: each live actor's progress index.
    /// Two snapshots are equal iff every actor has made identical progress,
    /// regardless of the order in which that progress was reached — this is
    /// what lets independent interleavings converge onto the same snapshot.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct FakeSnapshot {
        progress: BTreeMap<ActorId, usize>,
    }

    impl Snapshot for FakeSnapshot {
        fn equal(&self, other: &Self) -> bool {
            self.progress == other.progress
        }
    }

    #[derive(Debug, Default, Clone)]
    pub struct FakeRemoteAppBuilder {
        specs: Vec<ActorSpec>,
    }

    impl FakeRemoteAppBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn actor(mut self, spec: ActorSpec) -> Self {
            self.specs.push(spec);
            self
        }

        pub fn build(self) -> FakeRemoteApp {
            let progress = self.specs.iter().map(|s| (s.aid, 0usize)).collect();
            FakeRemoteApp {
                specs: self.specs,
                progress,
                finalized: false,
            }
        }
    }

    /// An in-process toy app driven entirely by [`ActorSpec`] scripts.
    #[derive(Debug, Clone)]
    pub struct FakeRemoteApp {
        specs: Vec<ActorSpec>,
        progress: BTreeMap<ActorId, usize>,
        finalized: bool,
    }

    impl FakeRemoteApp {
        pub fn builder() -> FakeRemoteAppBuilder {
            FakeRemoteAppBuilder::new()
        }

        // This is a test double: callers only ever pass back an `aid` this
        // app itself reported via `get_actors`, so the lookup cannot fail.
        #[allow(clippy::expect_used)]
        fn spec(&self, aid: ActorId) -> &ActorSpec {
            self.specs
                .iter()
                .find(|s| s.aid == aid)
                .expect("actor id must come from this app's spec list")
        }

        fn is_live(&self, aid: ActorId) -> bool {
            let spec = self.spec(aid);
            spec.repeat || self.progress[&aid] < spec.steps.len()
        }

        fn is_enabled(&self, aid: ActorId) -> bool {
            if !self.is_live(aid) {
                return false;
            }
            let spec = self.spec(aid);
            let step = self.progress[&aid] % spec.steps.len().max(1);
            match spec.requires.get(step).and_then(|r| *r) {
                None => true,
                Some((other, count)) => {
                    self.progress.get(&other).copied().unwrap_or(0) >= count
                }
            }
        }

        pub fn finalized(&self) -> bool {
            self.finalized
        }
    }

    impl RemoteApp for FakeRemoteApp {
        type Snapshot = FakeSnapshot;

        fn get_actors(&mut self) -> Result<Vec<(ActorId, ActorDescriptor)>, RemoteAppError> {
            Ok(self
                .specs
                .iter()
                .map(|s| s.aid)
                .filter(|aid| self.is_live(*aid))
                .map(|aid| (aid, ActorDescriptor::new(self.is_enabled(aid))))
                .collect())
        }

        fn heap_bytes_used(&mut self) -> Result<usize, RemoteAppError> {
            const BYTES_PER_STEP: usize = 64;
            Ok(self.progress.values().sum::<usize>() * BYTES_PER_STEP)
        }

        fn execute(
            &mut self,
            aid: ActorId,
            times_considered: u32,
        ) -> Result<Transition, RemoteAppError> {
            if !self.is_enabled(aid) {
                return Err(RemoteAppError::Failure(format!(
                    "actor {aid} is not enabled"
                )));
            }
            let spec = self.spec(aid).clone();
            let step = self.progress[&aid] % spec.steps.len();
            if spec.violations.get(step).copied().unwrap_or(false) {
                return Err(RemoteAppError::SafetyViolation(format!(
                    "actor {aid} step {step} violates the property under check"
                )));
            }
            let kind = spec.steps[step].clone();
            let next = self.progress[&aid] + 1;
            let next = if spec.repeat && next >= spec.steps.len() {
                0
            } else {
                next
            };
            self.progress.insert(aid, next);
            Ok(Transition::new(aid, times_considered, kind))
        }

        fn check_deadlock(&mut self) -> Result<(), RemoteAppError> {
            let live: Vec<ActorId> = self
                .specs
                .iter()
                .map(|s| s.aid)
                .filter(|aid| self.is_live(*aid))
                .collect();
            if live.is_empty() {
                return Ok(());
            }
            if live.iter().any(|aid| self.is_enabled(*aid)) {
                return Ok(());
            }
            Err(RemoteAppError::Deadlock)
        }

        fn take_snapshot(&mut self, _state_num: StateNum) -> Result<Self::Snapshot, RemoteAppError> {
            Ok(FakeSnapshot {
                progress: self.progress.clone(),
            })
        }

        fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<(), RemoteAppError> {
            self.progress = snapshot.progress.clone();
            self.finalized = false;
            Ok(())
        }

        fn restore_initial_state(&mut self) -> Result<(), RemoteAppError> {
            self.progress = self.specs.iter().map(|s| (s.aid, 0usize)).collect();
            self.finalized = false;
            Ok(())
        }

        fn replay(&mut self, transition: &Transition) -> Result<(), RemoteAppError> {
            self.execute(transition.aid, transition.times_considered)
                .map(|_| ())
        }

        fn finalize_app(&mut self) -> Result<(), RemoteAppError> {
            self.finalized = true;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
