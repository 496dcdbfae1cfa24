//! # context-scanner-engine
//!
//! The scanning core of a ConTeXt editor integration. Two passes over a
//! read-only snapshot of a document:
//!
//! - [`classify_runs`] tags every byte as command name, option text,
//!   parameter text, comment text or plain text, for colouring
//! - [`scan_outline`] finds `\start<name>` / `\stop<name>` blocks for
//!   navigation and folding
//!
//! Both are total: mid-edit documents with unclosed braces or stray stop
//! commands still produce a complete classification and a usable outline.
//!
//! ```
//! use context_scanner_engine::{RunKind, classify_runs, scan_outline};
//!
//! let text = "\\startsection[title=Intro] \\em{hi} \\stopsection";
//!
//! let runs = classify_runs(text);
//! assert_eq!(runs[0].kind, RunKind::CommandName);
//! assert_eq!(runs.iter().map(|r| r.len).sum::<usize>(), text.len());
//!
//! let outline = scan_outline(text);
//! assert_eq!(outline[0].name, "section");
//! ```

pub mod io;
pub mod scanning;

// Re-export key types for easier usage
pub use io::*;
pub use scanning::{
    DEFAULT_MAX_NESTING, OutlineEntry, Run, RunKind, ScanOptions, ScannedDocument,
    VerbatimPolicy, classify_runs, classify_runs_with, rope::Span, scan_document, scan_outline,
    scan_outline_with,
};
