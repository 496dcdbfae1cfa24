use crate::scanning::walker::RunVisitor;

use super::types::{Run, RunKind};

/// Collects runs so that together they always tile the document.
///
/// Every run starts where the previous one ended: callers only say what kind
/// the text up to some position was, never where it began.
pub struct RunSink {
    flushed: usize,
    out: Vec<Run>,
}

impl RunSink {
    pub fn new() -> Self {
        Self {
            flushed: 0,
            out: vec![],
        }
    }

    pub fn finish(self) -> Vec<Run> {
        self.out
    }
}

impl RunVisitor for RunSink {
    /// Classifies `[flushed, end)` as `kind`.
    ///
    /// Empty ranges are dropped. A range that continues a run of the same
    /// kind extends it, except for command names, which stay one per run.
    fn close(&mut self, kind: RunKind, end: usize) {
        if end <= self.flushed {
            return;
        }
        let len = end - self.flushed;
        match self.out.last_mut() {
            Some(last) if last.kind == kind && kind != RunKind::CommandName => {
                last.len += len;
            }
            _ => self.out.push(Run {
                kind,
                start: self.flushed,
                len,
            }),
        }
        self.flushed = end;
    }
}

impl Default for RunSink {
    fn default() -> Self {
        Self::new()
    }
}
