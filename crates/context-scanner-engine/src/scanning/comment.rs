//! Lexical rules shared by both scanners: what a letter is, which characters
//! a backslash escapes, and where a comment starts and ends.

/// Starts a comment that runs to the end of the line.
pub const COMMENT: u8 = b'%';

/// Introduces a command name.
pub const ESCAPE: u8 = b'\\';

/// Characters that form a two-character control symbol after a backslash.
///
/// `\%` is a literal percent sign rather than a comment, `\{` a literal brace
/// rather than a group opener.
pub const ESCAPABLE: &[u8] = b"\\%{}#$&_^~";

/// Letters make up command names; anything else terminates one.
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

pub fn is_escapable(b: u8) -> bool {
    ESCAPABLE.contains(&b)
}

/// Returns true if a comment starts at `pos`: the byte is `%` and it is not
/// escaped by an odd run of backslashes directly before it.
pub fn starts_at(bytes: &[u8], pos: usize) -> bool {
    if bytes.get(pos) != Some(&COMMENT) {
        return false;
    }
    let backslashes = bytes[..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == ESCAPE)
        .count();
    backslashes % 2 == 0
}

/// Returns the position just past the line terminator that ends the line
/// containing `from`, or the document length if the line is the last one.
pub fn line_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\n' => return i + 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => return i + 2,
            b'\r' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}
