// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The error taxonomy surfaced by a run. `DepthLimitInDPOR` is deliberately
//! not a variant here: it is the warn-and-backtrack branch inside `run()`,
//! not a terminal error.

use mc_core::RemoteAppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExploreError {
    /// `check_deadlock` failed after a backtrack: surfaced as a
    /// counter-example, exploration stops.
    #[error("deadlock: no actor is enabled")]
    Deadlock,
    /// The app reported a property failure at the current step.
    #[error("safety violation: {0}")]
    SafetyViolation(String),
    /// A non-progressive cycle was detected.
    #[error("non-progressive cycle detected: {}", cycle.join(" | "))]
    Termination { cycle: Vec<String> },
    /// The app crashed or the connection was lost; fatal.
    #[error("remote app failure: {0}")]
    RemoteAppFailure(RemoteAppError),
}

impl From<RemoteAppError> for ExploreError {
    fn from(err: RemoteAppError) -> Self {
        match err {
            RemoteAppError::Deadlock => ExploreError::Deadlock,
            RemoteAppError::SafetyViolation(msg) => ExploreError::SafetyViolation(msg),
            other => ExploreError::RemoteAppFailure(other),
        }
    }
}
