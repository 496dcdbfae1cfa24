use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts text for a span as a single line, truncated to at most `max`
/// bytes with a "..." suffix if needed.
///
/// Line terminators are shown escaped so one run or entry always renders on
/// one line of snapshot or dump output. Truncation backs off to the nearest
/// char boundary.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let s = slice_to_string(rope, sp);
    let mut cut = s.len();
    if s.len() > max {
        cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
    }

    let mut out = escape_line_breaks(&s[..cut]);
    if cut < s.len() {
        out.push_str("...");
    }
    out
}

fn escape_line_breaks(s: &str) -> String {
    s.replace('\r', "\\r").replace('\n', "\\n")
}
