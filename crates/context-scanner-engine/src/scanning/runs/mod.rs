//! # Run Classification
//!
//! Single-pass classification of a ConTeXt document into runs for colouring.
//!
//! ## States
//!
//! The classifier is a [`RunSink`](sink::RunSink) fed by the shared
//! [`walker`](crate::scanning::walker), a small state machine driven by one
//! character of lookahead:
//!
//! - **plain text** until a `\` (command) or an unescaped `%` (comment)
//! - **command name**: the backslash and the letters after it; whatever
//!   terminates the name is looked at again, and `[` or `{` open an argument
//! - **option text** `[...]` and **parameter text** `{...}`, matched by
//!   nesting depth; parameters may contain further commands, options may not
//! - **comment** through the line terminator, interrupting whatever run was
//!   open
//!
//! Whether a `{...}` argument is structured or literal is decided by the
//! [`VerbatimPolicy`] table, never inside the state machine.
//!
//! ## Modules
//!
//! - **`types`**: `Run` and `RunKind`
//! - **`policy`**: `VerbatimPolicy` command-name lookup table
//! - **`sink`**: `RunSink`, which guarantees runs tile the document
//! - **`classifier`**: `classify_runs()` entry points over the walk

pub mod classifier;
pub mod policy;
pub mod sink;
pub mod types;

pub use classifier::{classify_runs, classify_runs_with};
pub use policy::{DEFAULT_VERBATIM, ParameterPolicy, VerbatimPolicy};
pub use types::{Run, RunKind};
