use crate::scanning::rope::span::Span;

/// The syntactic category of a run.
///
/// These are the stable identifiers a host maps onto colours or styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// A backslash and the letters after it (`\startsection`), or a control
    /// symbol (`\%`, `\\`).
    CommandName,
    /// A structured `{...}` argument, outside any nested commands.
    ParameterText,
    /// A `[...]` argument, outside any comments inside it.
    OptionText,
    /// From an unescaped `%` through the end of its line.
    CommentText,
    /// Everything else, including the body of a verbatim argument.
    PlainText,
}

impl RunKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RunKind::CommandName => "CommandName",
            RunKind::ParameterText => "ParameterText",
            RunKind::OptionText => "OptionText",
            RunKind::CommentText => "CommentText",
            RunKind::PlainText => "PlainText",
        }
    }
}

/// A maximal span of text sharing one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub kind: RunKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Run {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }
}
