//! Line-oriented scanner for directive text
//!
//! The lexer keeps two byte offsets into a single line: `start` marks the
//! left edge of the token being built and `pos` is where scanning currently
//! stands. Words are cut out of the line between the two, delimited by
//! whitespace or caller-supplied stop characters.

/// Scanner over one directive line.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    data: &'a str,
    start: usize,
    pos: usize,
    /// Width in bytes of the last rune returned by [`Lexer::next_rune`].
    width: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the beginning of `data`.
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// The full line being scanned.
    pub fn line(&self) -> &'a str {
        self.data
    }

    /// Byte offset of the current token's left edge.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the scan position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True once the committed edge has reached the end of the line.
    pub fn at_end(&self) -> bool {
        self.start >= self.data.len()
    }

    /// Decode the next code point and advance past it.
    ///
    /// Returns `None` at the end of the line; the scan position is left
    /// untouched in that case.
    pub fn next_rune(&mut self) -> Option<char> {
        match self.data[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Undo the most recent [`Lexer::next_rune`].
    ///
    /// A second call without an intervening `next_rune` does nothing.
    pub fn rewind(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Fix the token boundary at the scan position.
    pub fn commit(&mut self) {
        self.start = self.pos;
    }

    /// Skip whitespace and any rune in `stop`, then commit.
    pub fn skip_while(&mut self, stop: &[char]) {
        while let Some(c) = self.next_rune() {
            if !c.is_whitespace() && !stop.contains(&c) {
                self.rewind();
                break;
            }
        }
        self.commit();
    }

    /// Consume runes up to whitespace or a rune in `stop` and return the
    /// slice from the committed edge.
    ///
    /// The stop rune is not consumed and the edge is not moved; callers
    /// follow up with [`Lexer::commit`] or [`Lexer::skip_while`].
    pub fn take_word(&mut self, stop: &[char]) -> &'a str {
        while let Some(c) = self.next_rune() {
            if c.is_whitespace() || stop.contains(&c) {
                self.rewind();
                break;
            }
        }
        &self.data[self.start..self.pos]
    }

    /// Slice between the committed edge and the scan position.
    pub fn pending(&self) -> &'a str {
        &self.data[self.start..self.pos]
    }
}
