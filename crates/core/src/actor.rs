// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor identifiers and the per-actor bookkeeping RemoteApp reports back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a concurrent actor in the app-under-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub i64);

impl ActorId {
    pub fn new(aid: i64) -> Self {
        Self(aid)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ActorId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// What RemoteApp knows about one actor at a given point in the exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorDescriptor {
    /// Whether the actor currently has at least one runnable simcall.
    pub enabled: bool,
    /// The highest `times_considered` value seen for this actor so far,
    /// for actors whose next simcall is non-deterministic.
    pub max_considered: u32,
}

impl ActorDescriptor {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            max_considered: 0,
        }
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
