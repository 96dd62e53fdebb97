// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Core data model for the DFS exploration engine: actors, transitions,
//! states, the counters the engine reports, and the `RemoteApp` contract
//! that the explorer drives the app-under-check through.

mod actor;
mod counters;
pub mod remote;
mod state;
mod transition;

pub use actor::{ActorDescriptor, ActorId};
pub use counters::Counters;
pub use remote::{RemoteApp, RemoteAppError, Snapshot};
pub use state::{State, StateNum};
pub use transition::{ResourceOp, Transition, TransitionKind};

#[cfg(any(test, feature = "test-support"))]
pub use remote::fake::{FakeRemoteApp, FakeRemoteAppBuilder};
