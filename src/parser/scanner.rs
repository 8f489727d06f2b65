//! Character scanner over a single trimmed line.
//!
//! The grammar only ever looks one token ahead and never backtracks,
//! so the scanner is a byte offset into the line plus a few primitives.

/// Cursor over one line of betting content.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Text between two positions previously returned by `position`.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Consume a run of ASCII digits. Returns the run, or `None` (and
    /// consumes nothing) if the next character is not a digit.
    pub fn digits(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return None;
        }
        let run = &rest[..len];
        self.pos += len;
        Some(run)
    }

    /// Consume whitespace; returns how many characters were skipped.
    pub fn whitespace(&mut self) -> usize {
        let mut skipped = 0;
        for c in self.rest().chars() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
            skipped += 1;
        }
        skipped
    }

    /// Consume `c` if it is next.
    pub fn eat(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume an ASCII keyword, ignoring case.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        match rest.get(..keyword.len()) {
            Some(head) if head.eq_ignore_ascii_case(keyword) => {
                self.pos += keyword.len();
                true
            }
            _ => false,
        }
    }

    /// Whether the character after the next comma is a digit, possibly
    /// after whitespace when `allow_space` is set. Consumes nothing.
    pub fn comma_then_digit(&self, allow_space: bool) -> bool {
        let mut probe = self.clone();
        if !probe.eat(',') {
            return false;
        }
        if allow_space {
            probe.whitespace();
        }
        probe.rest().bytes().next().is_some_and(|b| b.is_ascii_digit())
    }
}
