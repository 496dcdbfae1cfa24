//! # Snapshot Testing Support
//!
//! Utilities for testing the scanners via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`render`**: Converts runs and outline entries to a stable, line-per-item
//!   text form for `insta` snapshots and the CLI dump
//! - **`invariants`**: Runtime checks for scanner correctness (runs tile the
//!   document, outline entries nest, nothing runs past the end)

pub mod invariants;
pub mod render;

pub use invariants::{check_outline, check_runs};
pub use render::{render_outline, render_runs};
