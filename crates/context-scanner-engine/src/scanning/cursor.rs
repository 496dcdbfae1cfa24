/// A byte cursor over a whole source document with line tracking.
///
/// Both scanners own one of these for the duration of a single call. It only
/// moves forward; one-character lookahead is [`ScanCursor::peek`], which is
/// how a terminating character gets re-examined under a different state
/// without ever being pushed back.
#[derive(Clone)]
pub struct ScanCursor<'a> {
    /// The document being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
    /// 0-based line number of the current position.
    pub line: usize,
    /// Byte index where the current line begins.
    pub line_start: usize,
}

impl<'a> ScanCursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            line: 0,
            line_start: 0,
        }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// The whole document as bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.s.as_bytes()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    ///
    /// `\n`, `\r\n` and a lone `\r` each count as one line break.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        if b == b'\n' || (b == b'\r' && self.peek() != Some(b'\n')) {
            self.line += 1;
            self.line_start = self.i;
        }
        Some(b)
    }

    /// Advances to `end` (clamped to the end of the document).
    pub fn advance_to(&mut self, end: usize) {
        let end = end.min(self.s.len());
        while self.i < end {
            self.bump();
        }
    }

    /// Consumes bytes while `pred` holds and returns the consumed slice.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.bump();
        }
        &self.s[start..self.i]
    }
}
