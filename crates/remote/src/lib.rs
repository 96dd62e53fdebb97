// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The concrete, swappable transport that speaks the `RemoteApp` contract
//! (defined in `mc-core`) to a real app-under-check process.
//!
//! The launching and wire-protocol details here are an external
//! collaborator relative to the exploration engine — the engine only ever
//! depends on `mc_core::RemoteApp`. This crate exists so the engine has at
//! least one concrete, out-of-process implementation to run against, the
//! same way a `TmuxAdapter` sits alongside the `SessionAdapter` trait it
//! implements.

pub mod protocol;
mod snapshot;
mod subprocess;

pub use snapshot::SubprocessSnapshot;
pub use subprocess::SubprocessRemoteApp;
