use crate::scanning::rope::span::Span;

/// Prefix of a command that opens a block.
pub const START: &str = "start";
/// Prefix of a command that closes a block.
pub const STOP: &str = "stop";

/// A block delimited by `\start<name>` ... `\stop<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// The block name: `section` for `\startsection`.
    pub name: String,
    /// Offset of the backslash of the start command.
    pub start: usize,
    /// Offset just past the stop command, or the document length if the
    /// block is never closed.
    pub end: usize,
    /// Number of enclosing blocks.
    pub depth: usize,
    /// 1-based line of the start command.
    pub line: usize,
    /// 1-based byte column of the start command within its line.
    pub column: usize,
}

impl OutlineEntry {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}
