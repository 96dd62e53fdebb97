// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single executed step of one actor.
//!
//! `Transition` is the only place where simcall-level semantics enter the
//! engine. The explorer treats `depends` as a black-box oracle and never
//! inspects `kind` itself. The construction of rich transition kinds
//! (communication, mutex, barriers, ...) is out of scope for this engine;
//! [`TransitionKind`] below is the minimal concrete realization needed to
//! make `depends` computable for the RemoteApp implementations this crate
//! ships (see `mc-core::remote::fake` and `mc-remote::subprocess`).

use crate::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read/write discriminator for a named shared resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceOp {
    Read,
    Write,
}

/// The simcall-specific payload of a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Access (read or write) to a named shared resource. Two `Resource`
    /// transitions on the same `name` are dependent unless both are reads.
    Resource { name: String, op: ResourceOp },
    /// A step with no externally visible side effect; independent of
    /// every other transition.
    Local,
}

impl TransitionKind {
    fn depends(&self, other: &TransitionKind) -> bool {
        match (self, other) {
            (
                TransitionKind::Resource { name: n1, op: op1 },
                TransitionKind::Resource { name: n2, op: op2 },
            ) => n1 == n2 && (*op1 == ResourceOp::Write || *op2 == ResourceOp::Write),
            _ => false,
        }
    }

    fn label(&self) -> String {
        match self {
            TransitionKind::Resource {
                name,
                op: ResourceOp::Read,
            } => format!("read({name})"),
            TransitionKind::Resource {
                name,
                op: ResourceOp::Write,
            } => format!("write({name})"),
            TransitionKind::Local => "local".to_string(),
        }
    }
}

/// One executed simcall of one actor. Immutable once constructed;
/// constructed only by a `RemoteApp` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub aid: ActorId,
    /// Which of this actor's enabled simcalls was taken, for actors with a
    /// non-deterministic next step.
    pub times_considered: u32,
    kind: TransitionKind,
}

impl Transition {
    pub fn new(aid: ActorId, times_considered: u32, kind: TransitionKind) -> Self {
        Self {
            aid,
            times_considered,
            kind,
        }
    }

    pub fn kind(&self) -> &TransitionKind {
        &self.kind
    }

    /// True iff `self` and `other` do not commute: reordering them would
    /// change observable behavior. Symmetric by construction.
    pub fn depends(&self, other: &Transition) -> bool {
        self.kind.depends(&other.kind)
    }

    /// Human-readable textual form, e.g. for the failure trace in the
    /// reporting surface.
    pub fn to_display_string(&self) -> String {
        format!("{}", self)
    }

    /// One-line dot edge label.
    pub fn dot_label(&self) -> String {
        format!("label=\"{}: {}\"", self.aid, self.kind.label())
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.label())
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
