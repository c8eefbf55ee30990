//! Property-based tests for the tokenizer.
//!
//! Sources are drawn both from arbitrary bytes and from a delimiter-heavy
//! alphabet, so that strings, comments, escapes and brackets interleave
//! far more often than in random data. For every language preset:
//! 1. Lossless: `to_source()` reproduces the input
//! 2. Spans tile the source without gaps
//! 3. Scope links are symmetric
//! 4. Bracket pairs of one family never cross
//! 5. Idempotence: tokenizing twice gives the same list

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tinge_lexer::{tokenize, Language, TokenKind, TokenList};

const BRACKETS: [(u8, u8); 4] = [(b'(', b')'), (b'[', b']'), (b'{', b'}'), (b'<', b'>')];

/// Bytes that exercise every classifier and resolver rule.
fn delimiter_heavy() -> impl Strategy<Value = Vec<u8>> {
    let piece = prop_oneof![
        Just(&b"\""[..]),
        Just(&b"'"[..]),
        Just(&b"`"[..]),
        Just(&b"\\"[..]),
        Just(&b"("[..]),
        Just(&b")"[..]),
        Just(&b"["[..]),
        Just(&b"]"[..]),
        Just(&b"{"[..]),
        Just(&b"}"[..]),
        Just(&b"<"[..]),
        Just(&b">"[..]),
        Just(&b"/"[..]),
        Just(&b"*"[..]),
        Just(&b"#"[..]),
        Just(&b"-"[..]),
        Just(&b"!"[..]),
        Just(&b"."[..]),
        Just(&b"\n"[..]),
        Just(&b"\t"[..]),
        Just(&b" "[..]),
        Just(&b"42"[..]),
        Just(&b"x"[..]),
        Just(&b"TODO"[..]),
        Just(&b"return"[..]),
        Just(&b"def"[..]),
    ];
    proptest::collection::vec(piece, 0..120).prop_map(|pieces| pieces.concat())
}

fn any_source() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        delimiter_heavy(),
        proptest::collection::vec(any::<u8>(), 0..256),
    ]
}

fn any_language() -> impl Strategy<Value = Language> {
    proptest::sample::select(Language::ALL.to_vec())
}

fn check_spans_tile(tokens: &TokenList, len: usize) -> Result<(), TestCaseError> {
    let mut pos = 0;
    for token in tokens.iter() {
        prop_assert_eq!(token.span.start as usize, pos);
        pos = token.span.end as usize;
    }
    prop_assert_eq!(pos, len);
    Ok(())
}

proptest! {
    #[test]
    fn lossless_reconstruction(source in any_source(), lang in any_language(), width in 1u32..9) {
        let config = lang.config().with_tab_width(width);
        let tokens = tokenize(&source, Some(&config));
        prop_assert_eq!(tokens.to_source(), source);
    }

    #[test]
    fn concatenated_text_matches_with_tabs_expanded(source in any_source(), lang in any_language()) {
        let config = lang.config();
        let tokens = tokenize(&source, Some(&config));
        let text: Vec<u8> = tokens.iter().flat_map(|t| t.text.iter().copied()).collect();

        let mut expected = Vec::new();
        for &b in &source {
            if b == b'\t' {
                expected.extend_from_slice(b"    ");
            } else {
                expected.push(b);
            }
        }
        if tokens.has_synthetic_newline() {
            expected.push(b'\n');
        }
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn spans_tile_the_source(source in any_source(), lang in any_language()) {
        let config = lang.config();
        let tokens = tokenize(&source, Some(&config));
        check_spans_tile(&tokens, source.len())?;
    }

    #[test]
    fn always_ends_in_newline(source in any_source(), lang in any_language()) {
        let config = lang.config();
        let tokens = tokenize(&source, Some(&config));
        let last = &tokens[tokens.len() - 1];
        prop_assert_eq!(last.kind, TokenKind::Newline);
        prop_assert_eq!(tokens.has_synthetic_newline(), !source.ends_with(b"\n"));
    }

    #[test]
    fn links_are_symmetric(source in any_source(), lang in any_language()) {
        let config = lang.config();
        let tokens = tokenize(&source, Some(&config));
        for (i, token) in tokens.iter().enumerate() {
            let link = token.scope_link;
            prop_assert!(link < tokens.len());
            prop_assert_eq!(tokens[link].scope_link, i, "token {} links to {}", i, link);
        }
    }

    #[test]
    fn bracket_pairs_never_cross(source in delimiter_heavy(), lang in any_language()) {
        let config = lang.config();
        let tokens = tokenize(&source, Some(&config));
        for (open, close) in BRACKETS {
            let pairs: Vec<(usize, usize)> = tokens
                .iter()
                .enumerate()
                .filter(|&(i, t)| t.text == [open] && t.scope_link > i)
                .map(|(i, t)| (i, t.scope_link))
                .collect();
            for &(a, b) in &pairs {
                prop_assert_eq!(&tokens[b].text, &vec![close]);
                for &(c, d) in &pairs {
                    prop_assert!(!(a < c && c < b && b < d), "({}, {}) crosses ({}, {})", a, b, c, d);
                }
            }
        }
    }

    #[test]
    fn idempotent(source in any_source(), lang in any_language()) {
        let config = lang.config();
        prop_assert_eq!(tokenize(&source, Some(&config)), tokenize(&source, Some(&config)));
    }

    #[test]
    fn tokens_are_never_empty(source in any_source(), lang in any_language()) {
        let config = lang.config();
        let tokens = tokenize(&source, Some(&config));
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
    }
}
