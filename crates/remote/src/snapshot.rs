// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The opaque snapshot handle returned by [`crate::SubprocessRemoteApp`].
//!
//! The actual page-level memory capture is the out-of-process app's job;
//! what crosses the wire is whatever JSON value
//! the child considers sufficient to identify its own state. Equality is
//! therefore exactly JSON structural equality — the child is responsible
//! for making that byte-accurate with respect to its own memory.

use mc_core::Snapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubprocessSnapshot(pub serde_json::Value);

impl Snapshot for SubprocessSnapshot {
    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
