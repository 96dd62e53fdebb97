// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn default_config_is_unbounded_visited_and_no_reduction() {
    let config = ExplorerConfig::default();
    assert_eq!(config.reduction_mode, ReductionMode::None);
    assert_eq!(config.max_visited_states, 0);
    assert!(!config.wants_snapshot());
}

#[test]
fn termination_forces_none_even_if_dpor_was_requested() {
    let config = ExplorerConfig {
        reduction_mode: ReductionMode::Dpor,
        termination: true,
        ..ExplorerConfig::default()
    };
    assert_eq!(config.effective_reduction_mode(), ReductionMode::None);
}

#[test]
fn termination_requires_a_snapshot_even_without_visited_state_reduction() {
    let config = ExplorerConfig {
        termination: true,
        ..ExplorerConfig::default()
    };
    assert!(config.wants_snapshot());
}

#[test]
fn max_visited_states_alone_requires_a_snapshot() {
    let config = ExplorerConfig {
        max_visited_states: 16,
        ..ExplorerConfig::default()
    };
    assert!(config.wants_snapshot());
}
