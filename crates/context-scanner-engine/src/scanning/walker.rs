//! # Comment-context walk
//!
//! The descent both scanners are built on. It decides, for every byte, which
//! context it is in: plain text, a command name, an option or parameter
//! group, a verbatim body, or a comment. A `%` only starts a comment where the
//! walk says so, which is how the outline and the colouring stay in agreement
//! about what is commented out.
//!
//! The walk reports its progress as a stream of closed ranges to a
//! [`RunVisitor`]. [`RunSink`](crate::scanning::runs::sink::RunSink) turns the
//! stream into runs; the outline scanner only looks at command names.

use log::debug;

use crate::scanning::{
    ScanOptions,
    comment::{self, COMMENT, ESCAPE},
    cursor::ScanCursor,
    runs::RunKind,
};

/// Receives the walk as a sequence of classified ranges.
pub trait RunVisitor {
    /// The text from the end of the previous range up to `end` was `kind`.
    ///
    /// `end` never moves backwards; a call that does not move it describes an
    /// empty range.
    fn close(&mut self, kind: RunKind, end: usize);
}

/// Walks `text` once, feeding every range to `visitor`, and hands the
/// visitor back.
pub fn walk<V: RunVisitor>(text: &str, options: &ScanOptions, visitor: V) -> V {
    Walker {
        cur: ScanCursor::new(text),
        options,
        visitor,
    }
    .run()
}

/// The two bracketed argument forms a command can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    /// `[key=value, ...]`
    Option,
    /// `{...}`
    Parameter,
}

impl Group {
    fn after(b: Option<u8>) -> Option<Self> {
        match b {
            Some(b'[') => Some(Group::Option),
            Some(b'{') => Some(Group::Parameter),
            _ => None,
        }
    }

    fn delimiters(self) -> (u8, u8) {
        match self {
            Group::Option => (b'[', b']'),
            Group::Parameter => (b'{', b'}'),
        }
    }

    fn kind(self) -> RunKind {
        match self {
            Group::Option => RunKind::OptionText,
            Group::Parameter => RunKind::ParameterText,
        }
    }
}

struct Walker<'a, 'o, V> {
    cur: ScanCursor<'a>,
    options: &'o ScanOptions,
    visitor: V,
}

impl<V: RunVisitor> Walker<'_, '_, V> {
    fn run(mut self) -> V {
        while let Some(b) = self.cur.peek() {
            match b {
                ESCAPE => self.command(RunKind::PlainText, 0),
                COMMENT if self.at_comment() => self.comment(RunKind::PlainText),
                _ => {
                    self.cur.bump();
                }
            }
        }
        self.visitor.close(RunKind::PlainText, self.cur.pos());
        self.visitor
    }

    fn at_comment(&self) -> bool {
        comment::starts_at(self.cur.bytes(), self.cur.pos())
    }

    /// Consumes a comment through its line terminator. Whatever `outer` was
    /// accumulating stops just before the `%`.
    fn comment(&mut self, outer: RunKind) {
        self.visitor.close(outer, self.cur.pos());
        let end = comment::line_end(self.cur.bytes(), self.cur.pos());
        self.cur.advance_to(end);
        self.visitor.close(RunKind::CommentText, end);
    }

    /// Consumes a command starting at a backslash, then any arguments that
    /// follow it directly.
    ///
    /// `depth` counts how many arguments enclose this command.
    fn command(&mut self, outer: RunKind, depth: usize) {
        self.visitor.close(outer, self.cur.pos());
        self.cur.bump(); // `\`
        let name = self.cur.eat_while(comment::is_letter);
        if name.is_empty() {
            // Control symbol, or a bare backslash
            if self.cur.peek().is_some_and(comment::is_escapable) {
                self.cur.bump();
            }
            self.visitor.close(RunKind::CommandName, self.cur.pos());
            return;
        }
        self.visitor.close(RunKind::CommandName, self.cur.pos());
        self.arguments(name, depth);
    }

    fn arguments(&mut self, name: &str, depth: usize) {
        while let Some(group) = Group::after(self.cur.peek()) {
            if depth > self.options.max_nesting {
                debug!(
                    "nesting bound {} reached at \\{name} (offset {}), arguments left to enclosing group",
                    self.options.max_nesting,
                    self.cur.pos()
                );
                return;
            }
            if group == Group::Parameter && self.options.verbatim.is_verbatim(name) {
                self.verbatim();
            } else {
                self.group(group, depth);
            }
        }
    }

    /// Consumes a bracketed argument through its matching closer, or to end
    /// of document if there is none.
    fn group(&mut self, group: Group, depth: usize) {
        let (open, close) = group.delimiters();
        let kind = group.kind();
        self.cur.bump(); // opener
        let mut nesting = 1usize;
        while let Some(b) = self.cur.peek() {
            match b {
                COMMENT if self.at_comment() => self.comment(kind),
                ESCAPE if group == Group::Parameter => self.command(kind, depth + 1),
                ESCAPE => {
                    // `\]` and `\%` inside options are literal
                    self.cur.bump();
                    self.cur.bump();
                }
                _ if b == close => {
                    self.cur.bump();
                    nesting -= 1;
                    if nesting == 0 {
                        break;
                    }
                }
                _ => {
                    if b == open {
                        nesting += 1;
                    }
                    self.cur.bump();
                }
            }
        }
        self.visitor.close(kind, self.cur.pos());
    }

    /// Consumes a verbatim `{...}` argument. The braces are parameter text;
    /// everything between them is one plain run. Only braces are counted.
    fn verbatim(&mut self) {
        self.cur.bump(); // `{`
        self.visitor.close(RunKind::ParameterText, self.cur.pos());
        let mut nesting = 1usize;
        while let Some(b) = self.cur.peek() {
            match b {
                b'{' => nesting += 1,
                b'}' => {
                    nesting -= 1;
                    if nesting == 0 {
                        break;
                    }
                }
                _ => {}
            }
            self.cur.bump();
        }
        self.visitor.close(RunKind::PlainText, self.cur.pos());
        if self.cur.bump().is_some() {
            self.visitor.close(RunKind::ParameterText, self.cur.pos());
        }
    }
}
