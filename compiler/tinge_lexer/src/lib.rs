//! Highlighting tokenizer for tinge.
//!
//! Turns a source buffer into a [`TokenList`] for syntax-highlighted
//! rendering, in three passes:
//!
//! ```text
//! &[u8] → RawScanner → (RawTag, len) → classify → scope::resolve → TokenList
//! ```
//!
//! 1. **Scan** (`tinge_lexer_core`): maximal-munch runs of words, spaces,
//!    tabs, newlines and single other bytes.
//! 2. **Classify**: keywords, strings, numbers and comments, driven by a
//!    [`TokenizerConfig`].
//! 3. **Resolve**: symmetric scope links between matching quotes and
//!    brackets, used for structural selection.
//!
//! Tokenizing never fails. Unterminated strings and comments run to the
//! end of the buffer, unmatched delimiters link to themselves, and the
//! list always ends in a newline token.
//!
//! ```
//! use tinge_lexer::{tokenize, Language, TokenKind};
//!
//! let config = Language::C.config();
//! let tokens = tokenize(b"return (1);", Some(&config));
//! assert_eq!(tokens[0].kind, TokenKind::CodeKeyword);
//! assert_eq!(tokens[2].scope_link, 4);
//! assert_eq!(tokens[tokens.len() - 1].kind, TokenKind::Newline);
//! ```

mod classify;
mod config;
pub mod keywords;
mod language;
mod scope;
mod token;

use tinge_lexer_core::{RawScanner, RawTag, RawToken, SourceBuffer};

pub use config::{
    ConfigError, DelimiterPair, Highlight, KeywordSet, TokenizerConfig, DEFAULT_TAB_WIDTH,
    MAX_TAB_WIDTH,
};
pub use language::{Language, UnknownLanguage};
pub use token::{Lines, Span, Token, TokenKind, TokenList};

/// Largest source tokenized whole, in bytes.
pub const MAX_SOURCE_LEN: u32 = SourceBuffer::MAX_LEN;

/// Tokenize `source` for highlighting.
///
/// `None` uses [`TokenizerConfig::empty`]: no keywords, comments or
/// strings, only words, numbers and whitespace.
///
/// # Size limit
///
/// Offsets are 32-bit. Only the first [`MAX_SOURCE_LEN`] bytes
/// (4 GiB) of a longer source are tokenized, with a `warn!` logged;
/// [`TokenList::to_source`] then returns that prefix.
pub fn tokenize(source: &[u8], config: Option<&TokenizerConfig>) -> TokenList {
    let empty;
    let config = match config {
        Some(config) => config,
        None => {
            empty = TokenizerConfig::empty();
            &empty
        }
    };

    let buf = SourceBuffer::new(source);
    if buf.is_truncated() {
        tracing::warn!(
            bytes = source.len(),
            kept = buf.len(),
            "source exceeds the 32-bit offset limit; tokenizing a prefix"
        );
    }
    let source = buf.as_bytes();
    let raw: Vec<RawToken> = RawScanner::new(buf.cursor()).collect();
    let classified = classify::classify(source, &raw, config);
    let links = scope::resolve(source, &classified.lexemes, &classified.regions);

    let tab_width = config.tab_width();
    let mut tokens: Vec<Token> = classified
        .lexemes
        .iter()
        .zip(links)
        .map(|(lex, scope_link)| {
            let span = Span::new(lex.start, lex.end);
            let text = if lex.raw == RawTag::Tabs {
                vec![b' '; span.len() as usize * tab_width as usize]
            } else {
                source[span.to_range()].to_vec()
            };
            Token {
                kind: lex.kind,
                raw: lex.raw,
                text,
                span,
                scope_link,
            }
        })
        .collect();

    let synthetic_newline = !matches!(tokens.last(), Some(t) if t.kind == TokenKind::Newline);
    if synthetic_newline {
        tokens.push(Token {
            kind: TokenKind::Newline,
            raw: RawTag::Newline,
            text: b"\n".to_vec(),
            span: Span::point(buf.len()),
            scope_link: tokens.len(),
        });
    }

    tracing::debug!(
        bytes = buf.len(),
        runs = raw.len(),
        tokens = tokens.len(),
        synthetic_newline,
        "tokenized"
    );
    TokenList::new(tokens, tab_width, synthetic_newline)
}

/// Re-tokenize after a content change.
///
/// The previous list is dropped before the new one is returned; nothing
/// carries over between the two.
pub fn update(previous: TokenList, source: &[u8], config: Option<&TokenizerConfig>) -> TokenList {
    tracing::trace!(previous_tokens = previous.len(), "discarding previous tokens");
    drop(previous);
    tokenize(source, config)
}
