// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use mc_core::StateNum;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_edge_emits_one_dot_line() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let mut sink = DotSink::new(SharedBuf(buf.clone()));
    sink.write_edge(StateNum::new(0), StateNum::new(1), "label=\"1: local\"")
        .unwrap();

    let contents = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert_eq!(contents, "\"0\" -> \"1\" [label=\"1: local\"];\n");
}
