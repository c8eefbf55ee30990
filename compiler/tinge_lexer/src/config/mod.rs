//! Tokenizer configuration: delimiter table, keyword sets, toggles.
//!
//! A [`TokenizerConfig`] is an immutable value object. Build it once per
//! active file type (usually via [`Language::config`](crate::Language::config))
//! and pass it by reference into every [`tokenize`](crate::tokenize) call.
//! Nothing in the tokenizer mutates it, so it can be shared across threads.

use bitflags::bitflags;
use rustc_hash::FxHashSet;

/// Tab width used when a config does not set one.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// Widest tab expansion a config accepts.
pub const MAX_TAB_WIDTH: u32 = 16;

/// Errors raised while building a configuration.
///
/// The tokenizer itself never fails; only malformed configuration input
/// from a host is rejected, and only at construction time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A comment delimiter had an empty `begin` sequence.
    #[error("comment delimiter must have a non-empty begin sequence")]
    EmptyBegin,
    /// A block comment delimiter had an empty `end` sequence.
    #[error("block comment delimiter must have a non-empty end sequence")]
    EmptyEnd,
    /// A delimiter contained a tab or newline byte. Those bytes always
    /// form their own tokens, so a delimiter spanning them cannot match.
    #[error("comment delimiter {0:?} must not contain tabs or newlines")]
    LayoutByte(String),
}

/// Begin/end byte sequences of one comment style.
///
/// A line style ends at the newline (`end == "\n"`) and the newline itself
/// is never part of the comment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
    begin: Box<[u8]>,
    end: Box<[u8]>,
}

impl DelimiterPair {
    /// A line comment style opened by `begin`.
    pub fn line(begin: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let begin = begin.as_ref();
        if begin.is_empty() {
            return Err(ConfigError::EmptyBegin);
        }
        reject_layout_bytes(begin)?;
        Ok(Self::from_parts(begin, b"\n"))
    }

    /// A block comment style opened by `begin` and closed by `end`.
    pub fn block(begin: impl AsRef<[u8]>, end: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let (begin, end) = (begin.as_ref(), end.as_ref());
        if begin.is_empty() {
            return Err(ConfigError::EmptyBegin);
        }
        if end.is_empty() {
            return Err(ConfigError::EmptyEnd);
        }
        reject_layout_bytes(begin)?;
        reject_layout_bytes(end)?;
        Ok(Self::from_parts(begin, end))
    }

    /// `// ...`
    pub fn c_line() -> Self {
        Self::from_parts(b"//", b"\n")
    }

    /// `/* ... */`
    pub fn c_block() -> Self {
        Self::from_parts(b"/*", b"*/")
    }

    /// `# ...`
    pub fn hash_line() -> Self {
        Self::from_parts(b"#", b"\n")
    }

    /// `<!-- ... -->`
    pub fn html_block() -> Self {
        Self::from_parts(b"<!--", b"-->")
    }

    fn from_parts(begin: &[u8], end: &[u8]) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    pub fn begin(&self) -> &[u8] {
        &self.begin
    }

    pub fn end(&self) -> &[u8] {
        &self.end
    }

    /// Returns `true` if this style is implicitly closed by a newline.
    pub fn is_line(&self) -> bool {
        &*self.end == b"\n"
    }
}

fn reject_layout_bytes(delim: &[u8]) -> Result<(), ConfigError> {
    if delim.iter().any(|&b| b == b'\t' || b == b'\n') {
        return Err(ConfigError::LayoutByte(
            String::from_utf8_lossy(delim).into_owned(),
        ));
    }
    Ok(())
}

/// Exact-match set of keywords. Membership only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<Box<[u8]>>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl AsRef<[u8]>) -> bool {
        self.words.insert(word.as_ref().into())
    }

    #[inline]
    pub fn contains(&self, word: &[u8]) -> bool {
        !self.words.is_empty() && self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<[u8]>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<[u8]>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

bitflags! {
    /// Which classification rules run at all.
    ///
    /// A cleared flag disables its rule outright: the runs it would have
    /// claimed stay plain words.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Highlight: u8 {
        /// Code keywords.
        const KEYWORDS = 1 << 0;
        /// Numeric literals.
        const NUMBERS = 1 << 1;
        /// String literals.
        const STRINGS = 1 << 2;
        /// Keywords inside comments (`TODO`, `FIXME`, ...).
        const COMMENT_KEYWORDS = 1 << 3;
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything the tokenizer needs to know about one source language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizerConfig {
    code_keywords: KeywordSet,
    comment_keywords: KeywordSet,
    line_comment: Option<DelimiterPair>,
    block_comment: Option<DelimiterPair>,
    /// Bytes that open (and close) a string literal.
    quotes: Vec<u8>,
    highlight: Highlight,
    tab_width: u32,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl TokenizerConfig {
    /// No keywords, no comment delimiters, no quote characters.
    ///
    /// Used when a host has no configuration for a file type: everything
    /// still tokenizes as words, numbers and whitespace.
    pub fn empty() -> Self {
        Self {
            code_keywords: KeywordSet::new(),
            comment_keywords: KeywordSet::new(),
            line_comment: None,
            block_comment: None,
            quotes: Vec::new(),
            highlight: Highlight::default(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    #[must_use]
    pub fn with_code_keywords(mut self, keywords: KeywordSet) -> Self {
        self.code_keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_comment_keywords(mut self, keywords: KeywordSet) -> Self {
        self.comment_keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_line_comment(mut self, delimiter: DelimiterPair) -> Self {
        self.line_comment = Some(delimiter);
        self
    }

    #[must_use]
    pub fn with_block_comment(mut self, delimiter: DelimiterPair) -> Self {
        self.block_comment = Some(delimiter);
        self
    }

    /// Set the bytes that delimit string literals (e.g. `b"\"'"`).
    #[must_use]
    pub fn with_quotes(mut self, quotes: impl AsRef<[u8]>) -> Self {
        self.quotes = quotes.as_ref().to_vec();
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the tab expansion width, clamped to `1..=MAX_TAB_WIDTH`.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width.clamp(1, MAX_TAB_WIDTH);
        self
    }

    pub fn code_keywords(&self) -> &KeywordSet {
        &self.code_keywords
    }

    pub fn comment_keywords(&self) -> &KeywordSet {
        &self.comment_keywords
    }

    pub fn line_comment(&self) -> Option<&DelimiterPair> {
        self.line_comment.as_ref()
    }

    pub fn block_comment(&self) -> Option<&DelimiterPair> {
        self.block_comment.as_ref()
    }

    pub fn quotes(&self) -> &[u8] {
        &self.quotes
    }

    #[inline]
    pub fn is_quote(&self, byte: u8) -> bool {
        self.quotes.contains(&byte)
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }
}
