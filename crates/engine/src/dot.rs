// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The optional dot-graph sink: one line
//! `"<src>" -> "<dst>" [<label>];` per explored edge and per visited-hit
//! edge.

use mc_core::StateNum;
use std::io::{self, Write};

pub struct DotSink {
    writer: Box<dyn Write + Send>,
}

impl DotSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    pub fn write_edge(&mut self, src: StateNum, dst: StateNum, label: &str) -> io::Result<()> {
        writeln!(self.writer, "\"{src}\" -> \"{dst}\" [{label}];")
    }
}

#[cfg(test)]
#[path = "dot_tests.rs"]
mod tests;
