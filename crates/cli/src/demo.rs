// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The toy actor system driven by `--fake`, for trying the explorer
//! without writing an app-under-check. Two actors contend for a named
//! mutex-like resource, so the default run demonstrates both a commuting
//! step (each actor's own local work) and a dependent pair (the resource
//! access), which is enough to see DPOR do something visible.

use mc_core::remote::fake::{ActorSpec, FakeRemoteApp};
use mc_core::{ResourceOp, TransitionKind};

pub fn build() -> FakeRemoteApp {
    FakeRemoteApp::builder()
        .actor(ActorSpec::new(
            1,
            vec![
                TransitionKind::Local,
                TransitionKind::Resource {
                    name: "counter".to_string(),
                    op: ResourceOp::Write,
                },
            ],
        ))
        .actor(ActorSpec::new(
            2,
            vec![
                TransitionKind::Local,
                TransitionKind::Resource {
                    name: "counter".to_string(),
                    op: ResourceOp::Write,
                },
            ],
        ))
        .build()
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
