//! Classified tokens: the tokenizer's output.
//!
//! A [`TokenList`] is an owned, contiguous sequence. Token indices are
//! addresses: scope links point at them and renderers rebuild lines and
//! columns from them, so order is load-bearing.

use std::fmt;
use std::ops::{Index, Range};

use tinge_lexer_core::RawTag;

/// Semantic category of a token, used by renderers for color selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifiers, punctuation and anything else unclassified.
    Word,
    /// Part of a string literal, quotes included.
    String,
    /// Numeric literal, with a fused leading `-` and `.`-joined segments.
    Number,
    /// Member of the code keyword set.
    CodeKeyword,
    /// Member of the comment keyword set, inside a comment.
    CommentKeyword,
    /// Part of a comment, delimiters included.
    Comment,
    /// Exactly one `\n`.
    Newline,
    Spaces,
    /// Tab run; its text is already expanded into spaces.
    Tabs,
}

impl TokenKind {
    /// Stable upper-case name, as printed by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Word => "WORD",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::CodeKeyword => "CODE_KEYWORD",
            Self::CommentKeyword => "COMMENT_KEYWORD",
            Self::Comment => "COMMENT",
            Self::Newline => "NEWLINE",
            Self::Spaces => "SPACES",
            Self::Tabs => "TABS",
        }
    }

    /// `Comment` or `CommentKeyword`.
    pub fn is_comment(self) -> bool {
        matches!(self, Self::Comment | Self::CommentKeyword)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte range in the original source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub const fn point(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One classified token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Pass-1 category of the run(s) this token came from.
    pub raw: RawTag,
    /// Token text. Equal to the source bytes except for tab runs, which
    /// are expanded to `tab_width` spaces per tab.
    pub text: Vec<u8>,
    /// Where the token sits in the source. The synthetic trailing newline
    /// has an empty span at the end of the buffer.
    pub span: Span,
    /// Index of the structurally matching token, or this token's own index.
    pub scope_link: usize,
}

impl Token {
    /// Character count of [`text`](Self::text).
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text as UTF-8, if it is valid UTF-8.
    ///
    /// Non-ASCII characters are split byte-wise by the scanner, so tokens
    /// holding part of a multi-byte character return `None`.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }
}

/// Ordered token sequence produced by one tokenize call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    tab_width: u32,
    /// The final newline was appended because the source lacked one.
    synthetic_newline: bool,
}

impl TokenList {
    pub(crate) fn new(tokens: Vec<Token>, tab_width: u32, synthetic_newline: bool) -> Self {
        Self {
            tokens,
            tab_width,
            synthetic_newline,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Tab width the token texts were expanded with.
    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }

    /// Returns `true` if the trailing newline token is not in the source.
    pub fn has_synthetic_newline(&self) -> bool {
        self.synthetic_newline
    }

    /// Inclusive token range selected by double-clicking `index`.
    ///
    /// For a linked token this spans both ends of the pair, in source
    /// order; for a self-linked token it is the token alone.
    pub fn scope_span(&self, index: usize) -> Option<(usize, usize)> {
        let link = self.tokens.get(index)?.scope_link;
        Some((index.min(link), index.max(link)))
    }

    /// Token index ranges of each line, newline token included.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            tokens: &self.tokens,
            next: 0,
        }
    }

    /// Rebuild the original source bytes.
    ///
    /// Reverses tab expansion and drops the synthetic trailing newline.
    pub fn to_source(&self) -> Vec<u8> {
        let kept = if self.synthetic_newline {
            &self.tokens[..self.tokens.len() - 1]
        } else {
            &self.tokens[..]
        };
        let width = self.tab_width.max(1) as usize;
        let mut out = Vec::with_capacity(kept.iter().map(Token::len).sum());
        for token in kept {
            if token.raw == RawTag::Tabs {
                out.resize(out.len() + token.len() / width, b'\t');
            } else {
                out.extend_from_slice(&token.text);
            }
        }
        out
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Iterator over per-line token index ranges. See [`TokenList::lines`].
pub struct Lines<'a> {
    tokens: &'a [Token],
    next: usize,
}

impl Iterator for Lines<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.next >= self.tokens.len() {
            return None;
        }
        let start = self.next;
        let end = self.tokens[start..]
            .iter()
            .position(|t| t.kind == TokenKind::Newline)
            .map_or(self.tokens.len(), |offset| start + offset + 1);
        self.next = end;
        Some(start..end)
    }
}
