use log::{debug, trace};

use crate::scanning::{
    ScanOptions,
    cursor::ScanCursor,
    runs::RunKind,
    walker::{self, RunVisitor},
};

use super::types::{OutlineEntry, START, STOP};

/// Finds every `\start<name>` / `\stop<name>` block in `text` with the
/// default [`ScanOptions`].
pub fn scan_outline(text: &str) -> Vec<OutlineEntry> {
    scan_outline_with(text, &ScanOptions::default())
}

/// Finds every `\start<name>` / `\stop<name>` block in `text`.
///
/// Entries come out in the order their start commands appear, so nested
/// blocks follow their parent. Only real commands count: markers inside
/// comments, verbatim arguments or option text are ignored. A stop that does
/// not close the innermost open block is ignored, and blocks still open at
/// the end run to the end of the document.
pub fn scan_outline_with(text: &str, options: &ScanOptions) -> Vec<OutlineEntry> {
    walker::walk(text, options, OutlineBuilder::new(text)).finish()
}

struct OutlineBuilder<'a> {
    text: &'a str,
    /// Trails the walk to find the line and column of each start command.
    cur: ScanCursor<'a>,
    flushed: usize,
    out: Vec<OutlineEntry>,
    // Indices into `out` of the blocks that are still open.
    open: Vec<usize>,
}

impl<'a> OutlineBuilder<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            cur: ScanCursor::new(text),
            flushed: 0,
            out: vec![],
            open: vec![],
        }
    }

    /// `start..end` is one command name, backslash included.
    fn command(&mut self, start: usize, end: usize) {
        let text = self.text;
        let word = &text[start + 1..end];
        if let Some(name) = block_name(word, START) {
            self.cur.advance_to(start);
            self.out.push(OutlineEntry {
                name: name.to_string(),
                start,
                end: text.len(),
                depth: self.open.len(),
                line: self.cur.line + 1,
                column: start - self.cur.line_start + 1,
            });
            self.open.push(self.out.len() - 1);
        } else if let Some(name) = block_name(word, STOP) {
            match self.open.last().copied() {
                Some(top) if self.out[top].name == name => {
                    self.out[top].end = end;
                    self.open.pop();
                }
                _ => debug!("ignoring unmatched \\{word} at offset {start}"),
            }
        }
    }

    fn finish(self) -> Vec<OutlineEntry> {
        trace!(
            "outline: {} entries, {} left open at end of document",
            self.out.len(),
            self.open.len()
        );
        self.out
    }
}

impl RunVisitor for OutlineBuilder<'_> {
    fn close(&mut self, kind: RunKind, end: usize) {
        if end <= self.flushed {
            return;
        }
        let start = std::mem::replace(&mut self.flushed, end);
        if kind == RunKind::CommandName {
            self.command(start, end);
        }
    }
}

/// `section` for `startsection`; `None` for a bare `start` or another word.
fn block_name<'w>(word: &'w str, prefix: &str) -> Option<&'w str> {
    word.strip_prefix(prefix).filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanning::runs::VerbatimPolicy;
    use pretty_assertions::assert_eq;

    fn entries(text: &str) -> Vec<(String, usize, usize, usize)> {
        scan_outline(text)
            .into_iter()
            .map(|e| (e.name, e.start, e.end, e.depth))
            .collect()
    }

    #[test]
    fn single_block_spans_input() {
        let text = "\\starttext hello \\stoptext";
        assert_eq!(entries(text), vec![("text".into(), 0, text.len(), 0)]);
    }

    #[test]
    fn commented_start_is_ignored() {
        assert!(scan_outline("% \\startitemize").is_empty());
    }

    #[test]
    fn comment_only_lasts_one_line() {
        let text = "% \\startA\n\\startB\\stopB";
        assert_eq!(entries(text), vec![("B".into(), 10, 23, 0)]);
    }

    #[test]
    fn escaped_percent_does_not_suppress() {
        let text = "50\\% \\startitemize\\stopitemize";
        assert_eq!(entries(text), vec![("itemize".into(), 5, text.len(), 0)]);
    }

    #[test]
    fn escaped_backslash_then_percent_is_a_comment() {
        assert!(scan_outline("\\\\% \\startitemize").is_empty());
    }

    #[test]
    fn nested_blocks_get_depth() {
        let text = "\\startsection \\startitemize \\stopitemize \\stopsection";
        assert_eq!(
            entries(text),
            vec![
                ("section".into(), 0, text.len(), 0),
                ("itemize".into(), 14, 40, 1),
            ]
        );
    }

    #[test]
    fn unterminated_block_ends_at_document_end() {
        let text = "\\startchapter text with no stop";
        assert_eq!(entries(text), vec![("chapter".into(), 0, text.len(), 0)]);
    }

    #[test]
    fn mismatched_stop_is_ignored() {
        let text = "\\startA \\startB \\stopA";
        assert_eq!(
            entries(text),
            vec![
                ("A".into(), 0, text.len(), 0),
                ("B".into(), 8, text.len(), 1),
            ]
        );
    }

    #[test]
    fn stray_stop_without_open_block() {
        assert!(scan_outline("\\stopsection").is_empty());
    }

    #[test]
    fn siblings_share_depth() {
        let text = "\\startA\\stopA\\startB\\stopB";
        assert_eq!(
            entries(text),
            vec![("A".into(), 0, 13, 0), ("B".into(), 13, 26, 0)]
        );
    }

    #[test]
    fn bare_start_and_stop_are_not_entries() {
        assert!(scan_outline("\\start x \\stop").is_empty());
    }

    #[test]
    fn lines_are_one_based() {
        let outline = scan_outline("x\n\\startA\n\\startB\r\n\\stopB\\stopA");
        let lines: Vec<_> = outline.iter().map(|e| (e.name.as_str(), e.line)).collect();
        assert_eq!(lines, vec![("A", 2), ("B", 3)]);
    }

    #[test]
    fn markers_must_prefix_the_command_name() {
        assert!(scan_outline("\\restart \\unstop \\nostartA").is_empty());
    }

    #[test]
    fn block_name_is_everything_after_the_prefix() {
        let outline = scan_outline("\\startMPcode x \\stopMPcode");
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].name, "MPcode");
    }

    #[test]
    fn percent_in_verbatim_argument_is_not_a_comment() {
        let text = "\\type{50%} \\startsection x \\stopsection";
        assert_eq!(entries(text), vec![("section".into(), 11, text.len(), 0)]);
    }

    #[test]
    fn markers_inside_verbatim_are_not_blocks() {
        assert!(scan_outline("\\type{\\startsection}").is_empty());
    }

    #[test]
    fn markers_inside_options_are_not_blocks() {
        assert!(scan_outline("\\setup[before=\\startA]").is_empty());
    }

    #[test]
    fn markers_inside_parameters_are_blocks() {
        let text = "\\framed{\\startA x\\stopA}";
        assert_eq!(entries(text), vec![("A".into(), 8, 23, 0)]);
    }

    #[test]
    fn custom_verbatim_commands_hide_markers() {
        let options = ScanOptions {
            verbatim: VerbatimPolicy::with_verbatim(["code"]),
            ..ScanOptions::default()
        };
        let text = "\\code{\\startA} \\type{\\startB}";
        let names: Vec<_> = scan_outline_with(text, &options)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["B".to_string()]);
    }

    #[test]
    fn columns_are_one_based() {
        let outline = scan_outline("\\startA\n  \\startB\r\n\tx \\startC");
        let positions: Vec<_> = outline.iter().map(|e| (e.line, e.column)).collect();
        assert_eq!(positions, vec![(1, 1), (2, 3), (3, 4)]);
    }
}
