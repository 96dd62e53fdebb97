// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The line-delimited JSON wire protocol spoken with an app-under-check
//! launched as a subprocess. One [`Request`] object per line on the child's
//! stdin, one [`Response`] object per line on its stdout; framing is a
//! trailing `\n`, nothing fancier, since both sides are always caught up
//! before the next line is written: every `RemoteApp` call is synchronous
//! and blocking.

use mc_core::{ActorDescriptor, ActorId, Transition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    GetActors,
    HeapBytesUsed,
    Execute {
        aid: ActorId,
        times_considered: u32,
    },
    CheckDeadlock,
    TakeSnapshot {
        state_num: i64,
    },
    Restore {
        snapshot: serde_json::Value,
    },
    RestoreInitialState,
    Replay {
        transition: Transition,
    },
    Finalize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Deadlock,
    SafetyViolation,
    Failure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

/// A single reply line. `ok: false` carries an [`ErrorBody`]; `ok: true`
/// carries whatever payload the request implies, left as a loose
/// `serde_json::Value` map so each command only needs to populate the
/// fields it actually returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<ErrorBody>,
    #[serde(default)]
    pub actors: Option<Vec<(ActorId, ActorDescriptor)>>,
    #[serde(default)]
    pub heap_bytes_used: Option<usize>,
    #[serde(default)]
    pub transition: Option<Transition>,
    #[serde(default)]
    pub snapshot: Option<serde_json::Value>,
}

impl Response {
    pub fn ok_empty() -> Self {
        Self {
            ok: true,
            error: None,
            actors: None,
            heap_bytes_used: None,
            transition: None,
            snapshot: None,
        }
    }
}
