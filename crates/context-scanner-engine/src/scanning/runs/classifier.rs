use log::trace;

use crate::scanning::{ScanOptions, walker};

use super::{sink::RunSink, types::Run};

/// Classifies every byte of `text` with the default [`ScanOptions`].
pub fn classify_runs(text: &str) -> Vec<Run> {
    classify_runs_with(text, &ScanOptions::default())
}

/// Classifies every byte of `text` into an ordered, contiguous sequence of
/// [`Run`]s.
///
/// Never fails: unterminated arguments close at end of document, stray
/// closing brackets are plain text.
pub fn classify_runs_with(text: &str, options: &ScanOptions) -> Vec<Run> {
    let runs = walker::walk(text, options, RunSink::new()).finish();
    trace!("classified {} bytes into {} runs", text.len(), runs.len());
    runs
}
