use std::fmt::Write;

use xi_rope::Rope;

use crate::scanning::{outline::OutlineEntry, rope::slice::preview, runs::Run};

/// One line per run: `kind start..end "text"`.
pub fn render_runs(rope: &Rope, runs: &[Run]) -> String {
    let mut out = String::new();
    for r in runs {
        let _ = writeln!(
            out,
            "{} {}..{} {:?}",
            r.kind.as_str(),
            r.start,
            r.end(),
            preview(rope, r.span(), 60)
        );
    }
    out
}

/// One line per entry, indented by depth: `name start..end line N`.
pub fn render_outline(entries: &[OutlineEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "{}{} {}..{} line {}",
            "  ".repeat(e.depth),
            e.name,
            e.start,
            e.end,
            e.line
        );
    }
    out
}
