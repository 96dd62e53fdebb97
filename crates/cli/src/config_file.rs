// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery and parsing of `.mc/config.toml`: look in the current
//! directory (the caller is expected to `-C` first if they want a
//! different one), fall back to field-by-field defaults when the file or
//! any given key is absent.

use mc_explorer::{ExplorerConfig, ReductionMode};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    reduction_mode: Option<ReductionMode>,
    max_depth: Option<usize>,
    max_visited_states: Option<usize>,
    termination: Option<bool>,
    dot_output: Option<PathBuf>,
}

/// What the config file contributes, layered under CLI flags by the
/// caller (`main.rs`): CLI flags always win when both are present.
#[derive(Debug, Default)]
pub struct FileDefaults {
    pub reduction_mode: Option<ReductionMode>,
    pub max_depth: Option<usize>,
    pub max_visited_states: Option<usize>,
    pub termination: Option<bool>,
    pub dot_output: Option<PathBuf>,
}

/// Read `<project_root>/.mc/config.toml`, if present. A missing file is not
/// an error: every field simply defaults to `None`.
pub fn load(project_root: &Path) -> anyhow::Result<FileDefaults> {
    let path = project_root.join(".mc/config.toml");
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return Ok(FileDefaults::default());
    };
    let parsed: FileConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("parsing {}: {e}", path.display()))?;
    Ok(FileDefaults {
        reduction_mode: parsed.reduction_mode,
        max_depth: parsed.max_depth,
        max_visited_states: parsed.max_visited_states,
        termination: parsed.termination,
        dot_output: parsed.dot_output,
    })
}

/// Merge CLI-flag overrides (each `Some` wins) over file defaults into a
/// complete `ExplorerConfig`.
pub fn merge(
    defaults: FileDefaults,
    reduction_mode: Option<ReductionMode>,
    max_depth: Option<usize>,
    max_visited_states: Option<usize>,
    termination: Option<bool>,
) -> ExplorerConfig {
    let base = ExplorerConfig::default();
    ExplorerConfig {
        reduction_mode: reduction_mode
            .or(defaults.reduction_mode)
            .unwrap_or(base.reduction_mode),
        max_depth: max_depth.or(defaults.max_depth).unwrap_or(base.max_depth),
        max_visited_states: max_visited_states
            .or(defaults.max_visited_states)
            .unwrap_or(base.max_visited_states),
        termination: termination
            .or(defaults.termination)
            .unwrap_or(base.termination),
    }
}

#[cfg(test)]
#[path = "config_file_tests.rs"]
mod tests;
