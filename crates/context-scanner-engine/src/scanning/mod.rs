pub mod comment;
pub mod cursor;
pub mod options;
pub mod outline;
pub mod rope;
pub mod runs;
pub mod snapshot;
pub mod walker;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

pub use options::{DEFAULT_MAX_NESTING, ScanOptions};
pub use outline::{OutlineEntry, scan_outline, scan_outline_with};
pub use runs::{Run, RunKind, VerbatimPolicy, classify_runs, classify_runs_with};

/// Both scanners' output for one snapshot of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDocument {
    pub runs: Vec<Run>,
    pub outline: Vec<OutlineEntry>,
}

/// Runs the classifier and the outline scanner over a rope snapshot.
///
/// The rope is flattened once; both passes read the same text.
pub fn scan_document(rope: &Rope, options: &ScanOptions) -> ScannedDocument {
    let text = rope.slice_to_cow(..);
    ScannedDocument {
        runs: classify_runs_with(&text, options),
        outline: scan_outline_with(&text, options),
    }
}
