// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::fs;

#[test]
fn missing_config_file_yields_all_none() {
    let dir = tempfile::tempdir().unwrap();
    let defaults = load(dir.path()).unwrap();
    assert!(defaults.max_depth.is_none());
    assert!(defaults.reduction_mode.is_none());
}

#[test]
fn present_config_file_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".mc")).unwrap();
    fs::write(
        dir.path().join(".mc/config.toml"),
        "max_depth = 50\ntermination = true\n",
    )
    .unwrap();
    let defaults = load(dir.path()).unwrap();
    assert_eq!(defaults.max_depth, Some(50));
    assert_eq!(defaults.termination, Some(true));
}

#[test]
fn cli_flag_overrides_file_default() {
    let defaults = FileDefaults {
        max_depth: Some(10),
        ..FileDefaults::default()
    };
    let config = merge(defaults, None, Some(99), None, None);
    assert_eq!(config.max_depth, 99);
}

#[test]
fn file_default_is_used_when_no_cli_flag_given() {
    let defaults = FileDefaults {
        max_depth: Some(10),
        ..FileDefaults::default()
    };
    let config = merge(defaults, None, None, None, None);
    assert_eq!(config.max_depth, 10);
}

#[test]
fn neither_given_falls_back_to_explorer_default() {
    let config = merge(FileDefaults::default(), None, None, None, None);
    assert_eq!(config.max_depth, ExplorerConfig::default().max_depth);
}
