// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The explorer's configuration, and nothing else — discovery of
//! `.mc/config.toml` and CLI-flag overrides are the CLI crate's concern,
//! not the engine's.

use serde::{Deserialize, Serialize};

/// Which reduction strategy prunes equivalent interleavings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionMode {
    /// No reduction: every enabled actor is seeded into `todo` at every
    /// state.
    #[default]
    None,
    /// Dynamic Partial Order Reduction: seed only the first enabled actor;
    /// additional actors enter `todo` lazily via the backtrack wake-up rule.
    Dpor,
}

/// The explorer's full configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub reduction_mode: ReductionMode,
    /// Hard cap on stack size.
    pub max_depth: usize,
    /// 0 disables state-equality reduction.
    pub max_visited_states: usize,
    /// Enable non-progressive cycle detection. Forces `reduction_mode` to
    /// `None`; the explorer logs a warning if the caller asked for DPOR
    /// alongside termination checking.
    pub termination: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            reduction_mode: ReductionMode::default(),
            max_depth: 1000,
            max_visited_states: 0,
            termination: false,
        }
    }
}

impl ExplorerConfig {
    /// Whether successors need a full-system snapshot captured: either
    /// state-equality reduction or non-termination detection requires
    /// comparing snapshots.
    pub fn wants_snapshot(&self) -> bool {
        self.max_visited_states > 0 || self.termination
    }

    /// `reduction_mode` with the `termination` forcing rule applied.
    pub fn effective_reduction_mode(&self) -> ReductionMode {
        if self.termination && self.reduction_mode == ReductionMode::Dpor {
            ReductionMode::None
        } else {
            self.reduction_mode
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
