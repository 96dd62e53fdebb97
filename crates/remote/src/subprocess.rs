// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! [`SubprocessRemoteApp`]: launches the app-under-check as a child process
//! and drives it over the line-delimited JSON protocol in [`crate::protocol`].
//!
//! This is a thin, swappable transport, not part of the reduction logic:
//! the explorer only ever talks to the [`mc_core::RemoteApp`] trait. Every
//! call blocks on a single request/response round trip, matching the
//! single-threaded, strictly sequential concurrency model — there
//! is deliberately no `tokio::process` here (see DESIGN.md).

use crate::protocol::{ErrorKind, Request, Response};
use crate::snapshot::SubprocessSnapshot;
use mc_core::{ActorDescriptor, ActorId, RemoteApp, RemoteAppError, StateNum, Transition};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Spawns and owns the app-under-check's process for the lifetime of the
/// exploration run: the single owner of a `RemoteApp`, never shared.
pub struct SubprocessRemoteApp {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    line_buf: String,
}

impl SubprocessRemoteApp {
    /// Launch `command` with `args`, wiring its stdin/stdout as pipes for
    /// the protocol. The child's stderr is inherited so its own logging
    /// still reaches the terminal.
    pub fn spawn(command: &str, args: &[String]) -> Result<Self, RemoteAppError> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                RemoteAppError::Failure(format!("failed to spawn app-under-check: {e}"))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| RemoteAppError::Failure("child stdin not piped".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| RemoteAppError::Failure("child stdout not piped".to_string()))?;

        Ok(Self {
            child,
            stdin: BufWriter::new(stdin),
            stdout: BufReader::new(stdout),
            line_buf: String::new(),
        })
    }

    fn roundtrip(&mut self, request: Request) -> Result<Response, RemoteAppError> {
        tracing::debug!(?request, "sending request to app-under-check");
        let mut line = serde_json::to_string(&request)
            .map_err(|e| RemoteAppError::Protocol(format!("encoding request: {e}")))?;
        line.push('\n');
        self.stdin
            .write_all(line.as_bytes())
            .map_err(|e| RemoteAppError::Failure(format!("writing to app: {e}")))?;
        self.stdin
            .flush()
            .map_err(|e| RemoteAppError::Failure(format!("flushing to app: {e}")))?;

        self.line_buf.clear();
        let n = self
            .stdout
            .read_line(&mut self.line_buf)
            .map_err(|e| RemoteAppError::Failure(format!("reading from app: {e}")))?;
        if n == 0 {
            return Err(RemoteAppError::Failure(
                "app-under-check closed its stdout".to_string(),
            ));
        }

        let response: Response = serde_json::from_str(self.line_buf.trim_end())
            .map_err(|e| RemoteAppError::Protocol(format!("decoding response: {e}")))?;

        if !response.ok {
            return Err(match response.error {
                Some(err) => match err.kind {
                    ErrorKind::Deadlock => RemoteAppError::Deadlock,
                    ErrorKind::SafetyViolation => RemoteAppError::SafetyViolation(err.message),
                    ErrorKind::Failure => RemoteAppError::Failure(err.message),
                },
                None => RemoteAppError::Protocol("error response with no body".to_string()),
            });
        }
        Ok(response)
    }
}

impl RemoteApp for SubprocessRemoteApp {
    type Snapshot = SubprocessSnapshot;

    fn get_actors(&mut self) -> Result<Vec<(ActorId, ActorDescriptor)>, RemoteAppError> {
        let response = self.roundtrip(Request::GetActors)?;
        response
            .actors
            .ok_or_else(|| RemoteAppError::Protocol("get_actors: missing actors".to_string()))
    }

    fn heap_bytes_used(&mut self) -> Result<usize, RemoteAppError> {
        let response = self.roundtrip(Request::HeapBytesUsed)?;
        response.heap_bytes_used.ok_or_else(|| {
            RemoteAppError::Protocol("heap_bytes_used: missing value".to_string())
        })
    }

    fn execute(
        &mut self,
        aid: ActorId,
        times_considered: u32,
    ) -> Result<Transition, RemoteAppError> {
        let response = self.roundtrip(Request::Execute {
            aid,
            times_considered,
        })?;
        response
            .transition
            .ok_or_else(|| RemoteAppError::Protocol("execute: missing transition".to_string()))
    }

    fn check_deadlock(&mut self) -> Result<(), RemoteAppError> {
        self.roundtrip(Request::CheckDeadlock).map(|_| ())
    }

    fn take_snapshot(&mut self, state_num: StateNum) -> Result<Self::Snapshot, RemoteAppError> {
        let response = self.roundtrip(Request::TakeSnapshot {
            state_num: state_num.0,
        })?;
        response
            .snapshot
            .map(SubprocessSnapshot)
            .ok_or_else(|| RemoteAppError::Protocol("take_snapshot: missing snapshot".to_string()))
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<(), RemoteAppError> {
        self.roundtrip(Request::Restore {
            snapshot: snapshot.0.clone(),
        })
        .map(|_| ())
    }

    fn restore_initial_state(&mut self) -> Result<(), RemoteAppError> {
        self.roundtrip(Request::RestoreInitialState).map(|_| ())
    }

    fn replay(&mut self, transition: &Transition) -> Result<(), RemoteAppError> {
        self.roundtrip(Request::Replay {
            transition: transition.clone(),
        })
        .map(|_| ())
    }

    fn finalize_app(&mut self) -> Result<(), RemoteAppError> {
        self.roundtrip(Request::Finalize).map(|_| ())
    }
}

impl Drop for SubprocessRemoteApp {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
