//! # Outline Scanning
//!
//! Finds `\start<name>` / `\stop<name>` blocks for navigation and folding.
//!
//! The scanner follows the same comment-context walk as the run classifier,
//! so a marker counts exactly when it is coloured as a command name.
//! It keeps a stack of open blocks. A stop command closes the
//! innermost block only if the names agree; anything else is left alone, so
//! a document mid-edit still yields a usable (if provisional) outline.

pub mod scanner;
pub mod types;

pub use scanner::{scan_outline, scan_outline_with};
pub use types::OutlineEntry;
