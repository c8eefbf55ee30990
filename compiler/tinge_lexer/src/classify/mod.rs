//! Pass 2: reclassify raw runs into highlighting categories.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → Classifier → Lexeme + Region
//! ```
//!
//! The classifier walks the runs once, left to right. Only runs that are
//! still plain words (word runs and single "other" bytes) can start a rule,
//! and the first rule that matches wins:
//!
//! 1. code keyword
//! 2. string, opened by a configured quote byte
//! 3. number, with sign fusion and `.`-joined segments
//! 4. line comment
//! 5. block comment
//!
//! A rule may swallow any number of following runs. Strings and comments
//! also record a [`Region`] so the scope resolver can treat their
//! interiors separately.

use memchr::memmem;
use tinge_lexer_core::{RawTag, RawToken};

use crate::config::{DelimiterPair, Highlight, TokenizerConfig};
use crate::TokenKind;

/// A classified span of source: one raw run, or several fused ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub kind: TokenKind,
    /// Tag of the underlying run. Fused numbers are `Word`, other fused
    /// lexemes `Other`.
    pub raw: RawTag,
    pub start: u32,
    pub end: u32,
}

impl Lexeme {
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// The byte of a one-byte lexeme.
    #[inline]
    pub fn single_byte(&self, source: &[u8]) -> Option<u8> {
        if self.len() == 1 {
            Some(source[self.start as usize])
        } else {
            None
        }
    }
}

/// A string or comment, as a half-open range of lexeme indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    /// [`TokenKind::String`] or [`TokenKind::Comment`].
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    /// `false` if the region ran into the end of the buffer.
    pub closed: bool,
}

/// Output of pass 2.
#[derive(Debug, Default)]
pub(crate) struct Classified {
    pub lexemes: Vec<Lexeme>,
    pub regions: Vec<Region>,
}

/// Raw run with its absolute position.
#[derive(Clone, Copy, Debug)]
struct Run {
    tag: RawTag,
    start: u32,
    end: u32,
}

/// Classify `raw` runs over `source`.
///
/// `raw` must cover `source` exactly, as produced by the raw scanner.
pub(crate) fn classify(source: &[u8], raw: &[RawToken], config: &TokenizerConfig) -> Classified {
    let mut offset = 0;
    let runs: Vec<Run> = raw
        .iter()
        .map(|tok| {
            let start = offset;
            offset += tok.len;
            Run {
                tag: tok.tag,
                start,
                end: offset,
            }
        })
        .collect();

    let mut classifier = Classifier {
        source,
        runs: &runs,
        config,
        pos: 0,
        out: Classified {
            lexemes: Vec::with_capacity(runs.len()),
            regions: Vec::new(),
        },
    };
    classifier.run();
    classifier.out
}

struct Classifier<'a> {
    source: &'a [u8],
    runs: &'a [Run],
    config: &'a TokenizerConfig,
    /// Index of the next unconsumed run.
    pos: usize,
    out: Classified,
}

impl Classifier<'_> {
    fn run(&mut self) {
        while let Some(&run) = self.runs.get(self.pos) {
            match run.tag {
                RawTag::Word | RawTag::Other => {
                    if !self.keyword(run)
                        && !self.string(run)
                        && !self.number(run)
                        && !self.line_comment()
                        && !self.block_comment(run)
                    {
                        self.push(run, TokenKind::Word);
                        self.pos += 1;
                    }
                }
                RawTag::Newline => {
                    self.push(run, TokenKind::Newline);
                    self.pos += 1;
                }
                RawTag::Spaces => {
                    self.push(run, TokenKind::Spaces);
                    self.pos += 1;
                }
                RawTag::Tabs => {
                    self.push(run, TokenKind::Tabs);
                    self.pos += 1;
                }
                RawTag::Eof => break,
            }
        }
    }

    // ─── Rules ─────────────────────────────────────────────────────

    fn keyword(&mut self, run: Run) -> bool {
        if run.tag != RawTag::Word
            || !self.enabled(Highlight::KEYWORDS)
            || !self.config.code_keywords().contains(self.text(run))
        {
            return false;
        }
        self.push(run, TokenKind::CodeKeyword);
        self.pos += 1;
        true
    }

    fn string(&mut self, run: Run) -> bool {
        if !self.enabled(Highlight::STRINGS) || run.tag != RawTag::Other {
            return false;
        }
        let quote = self.source[run.start as usize];
        if !self.config.is_quote(quote) {
            return false;
        }

        let first = self.out.lexemes.len();
        self.push(run, TokenKind::String);
        self.pos += 1;

        let mut closed = false;
        while let Some(&next) = self.runs.get(self.pos) {
            self.pos += 1;
            if next.tag == RawTag::Newline {
                self.push(next, TokenKind::Newline);
                continue;
            }
            self.push(next, TokenKind::String);
            if next.tag == RawTag::Other
                && self.source[next.start as usize] == quote
                && !is_escaped(self.source, next.start, run.end)
            {
                closed = true;
                break;
            }
        }
        if !closed {
            tracing::trace!(offset = run.start, "unterminated string runs to end of buffer");
        }
        self.region(TokenKind::String, first, closed);
        true
    }

    fn number(&mut self, run: Run) -> bool {
        if !self.enabled(Highlight::NUMBERS) || !self.is_digits(run) {
            return false;
        }

        let mut start = run.start;
        if let Some(prev) = self.out.lexemes.last() {
            if prev.kind == TokenKind::Word
                && prev.end == run.start
                && prev.single_byte(self.source) == Some(b'-')
            {
                start = prev.start;
                self.out.lexemes.pop();
            }
        }

        let mut end = run.end;
        self.pos += 1;
        while let (Some(&dot), Some(&digits)) =
            (self.runs.get(self.pos), self.runs.get(self.pos + 1))
        {
            if dot.tag != RawTag::Other || self.source[dot.start as usize] != b'.' {
                break;
            }
            if !self.is_digits(digits) {
                break;
            }
            end = digits.end;
            self.pos += 2;
        }

        self.out.lexemes.push(Lexeme {
            kind: TokenKind::Number,
            raw: RawTag::Word,
            start,
            end,
        });
        true
    }

    fn line_comment(&mut self) -> bool {
        let config = self.config;
        let Some(delim) = config.line_comment() else {
            return false;
        };
        let Some(last) = self.delimiter_at(self.pos, delim.begin()) else {
            return false;
        };

        let first = self.out.lexemes.len();
        self.fuse_comment(self.pos, last);
        while let Some(&next) = self.runs.get(self.pos) {
            if next.tag == RawTag::Newline {
                break;
            }
            self.push_comment(next);
            self.pos += 1;
        }
        self.region(TokenKind::Comment, first, true);
        true
    }

    fn block_comment(&mut self, run: Run) -> bool {
        let config = self.config;
        let Some(delim) = config.block_comment() else {
            return false;
        };
        let Some(last) = self.delimiter_at(self.pos, delim.begin()) else {
            return false;
        };

        let first = self.out.lexemes.len();
        self.fuse_comment(self.pos, last);

        let closer = self.find_block_end(delim, self.runs[last].end);
        let body_end = closer.map_or(self.runs.len(), |(open, _)| open);
        while self.pos < body_end {
            self.push_comment(self.runs[self.pos]);
            self.pos += 1;
        }
        if let Some((open, close)) = closer {
            self.fuse_comment(open, close);
        } else {
            tracing::trace!(offset = run.start, "unterminated block comment runs to end of buffer");
        }
        self.region(TokenKind::Comment, first, closer.is_some());
        true
    }

    // ─── Helpers ───────────────────────────────────────────────────

    #[inline]
    fn enabled(&self, flag: Highlight) -> bool {
        self.config.highlight().contains(flag)
    }

    fn text(&self, run: Run) -> &[u8] {
        &self.source[run.start as usize..run.end as usize]
    }

    fn is_digits(&self, run: Run) -> bool {
        run.tag == RawTag::Word && self.text(run).iter().all(u8::is_ascii_digit)
    }

    fn push(&mut self, run: Run, kind: TokenKind) {
        self.out.lexemes.push(Lexeme {
            kind,
            raw: run.tag,
            start: run.start,
            end: run.end,
        });
    }

    /// Push a run that sits inside a comment.
    fn push_comment(&mut self, run: Run) {
        let kind = match run.tag {
            RawTag::Newline => TokenKind::Newline,
            RawTag::Word
                if self.enabled(Highlight::COMMENT_KEYWORDS)
                    && self.config.comment_keywords().contains(self.text(run)) =>
            {
                TokenKind::CommentKeyword
            }
            _ => TokenKind::Comment,
        };
        self.push(run, kind);
    }

    /// Fuse runs `first..=last` into one comment delimiter lexeme.
    fn fuse_comment(&mut self, first: usize, last: usize) {
        self.out.lexemes.push(Lexeme {
            kind: TokenKind::Comment,
            raw: if first == last {
                self.runs[first].tag
            } else {
                RawTag::Other
            },
            start: self.runs[first].start,
            end: self.runs[last].end,
        });
        self.pos = last + 1;
    }

    fn region(&mut self, kind: TokenKind, start: usize, closed: bool) {
        self.out.regions.push(Region {
            kind,
            start,
            end: self.out.lexemes.len(),
            closed,
        });
    }

    /// If `delim` starts at run `first` and ends on a run boundary, returns
    /// the index of the run it ends in.
    fn delimiter_at(&self, first: usize, delim: &[u8]) -> Option<usize> {
        let start = self.runs.get(first)?.start;
        if !self.source[start as usize..].starts_with(delim) {
            return None;
        }
        let end = start as usize + delim.len();
        let mut last = first;
        while (self.runs[last].end as usize) < end {
            last += 1;
        }
        (self.runs[last].end as usize == end).then_some(last)
    }

    /// First occurrence of the block end delimiter at or after byte `from`
    /// that lines up with run boundaries, as `(first_run, last_run)`.
    fn find_block_end(&self, delim: &DelimiterPair, from: u32) -> Option<(usize, usize)> {
        let finder = memmem::Finder::new(delim.end());
        let mut at = from as usize;
        while let Some(found) = finder.find(&self.source[at..]) {
            let start = at + found;
            if let Ok(first) = self
                .runs
                .binary_search_by_key(&start, |run| run.start as usize)
            {
                if let Some(last) = self.delimiter_at(first, delim.end()) {
                    return Some((first, last));
                }
            }
            at = start + 1;
        }
        None
    }
}

/// Returns `true` if the byte at `pos` is escaped: preceded by an odd
/// number of consecutive backslashes, counting no further back than `floor`.
pub(crate) fn is_escaped(source: &[u8], pos: u32, floor: u32) -> bool {
    let backslashes = source[floor as usize..pos as usize]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}
