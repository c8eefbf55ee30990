//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, strings, numbers or comments. Those are decided later by the
//! classifier, which inspects delimiters one byte at a time; that is why
//! every byte outside the word/space/tab/newline classes is its own run.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. The sentinel byte (`0x00`)
//! dispatches to `eof()`, which tells the real end apart from an interior
//! null by position.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one run at a time as a `(tag, length)` pair. There is no error
/// path: every byte belongs to exactly one run.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw run.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let tag = match self.cursor.current() {
            0 if self.cursor.is_eof() => return RawToken::EOF,
            b'\n' => self.single(RawTag::Newline),
            b' ' => self.run_of(b' ', RawTag::Spaces),
            b'\t' => self.run_of(b'\t', RawTag::Tabs),
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => self.word(),
            _ => self.single(RawTag::Other),
        };

        // No-progress guard: every rule above consumes at least one byte,
        // but a run of length zero would loop forever, so force one.
        let tag = if self.cursor.pos() == start {
            self.cursor.advance();
            RawTag::Other
        } else {
            tag
        };

        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Current byte offset in the source.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    // ─── Runs ──────────────────────────────────────────────────────

    fn single(&mut self, tag: RawTag) -> RawTag {
        self.cursor.advance();
        tag
    }

    fn run_of(&mut self, byte: u8, tag: RawTag) -> RawTag {
        self.cursor.eat_while(|b| b == byte);
        tag
    }

    fn word(&mut self) -> RawTag {
        self.cursor.eat_while(is_word_byte);
        RawTag::Word
    }
}

impl RawToken {
    /// The end-of-input token.
    pub const EOF: RawToken = RawToken {
        tag: RawTag::Eof,
        len: 0,
    };
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Language-neutral identifier class: ASCII letters, digits, `_`.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan a whole buffer into raw runs (excluding `Eof`).
pub fn scan(source: &[u8]) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let tokens = RawScanner::new(buf.cursor()).collect();
    tokens
}
