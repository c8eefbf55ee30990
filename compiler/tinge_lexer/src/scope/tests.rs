use pretty_assertions::assert_eq;
use tinge_lexer_core::scan;

use super::*;
use crate::classify::classify;
use crate::config::{DelimiterPair, Highlight, TokenizerConfig};

fn c_config() -> TokenizerConfig {
    TokenizerConfig::empty()
        .with_line_comment(DelimiterPair::c_line())
        .with_block_comment(DelimiterPair::c_block())
        .with_quotes(b"\"'")
}

/// Every lexeme index paired with its link.
fn links(source: &str, config: &TokenizerConfig) -> Vec<(usize, usize)> {
    let bytes = source.as_bytes();
    let out = classify(bytes, &scan(bytes), config);
    resolve(bytes, &out.lexemes, &out.regions)
        .into_iter()
        .enumerate()
        .collect()
}

/// Only the non-self links, each pair once.
fn pairs(source: &str, config: &TokenizerConfig) -> Vec<(usize, usize)> {
    links(source, config)
        .into_iter()
        .filter(|&(i, link)| i < link)
        .collect()
}

// === Brackets ===

#[test]
fn nested_brackets_link_inner_and_outer() {
    // ( a ( b ) c )
    // 0 1 2 3 4 5 6
    assert_eq!(pairs("(a(b)c)", &TokenizerConfig::empty()), vec![(0, 6), (2, 4)]);
}

#[test]
fn families_are_matched_independently() {
    // [ ( ] )
    assert_eq!(pairs("[(])", &TokenizerConfig::empty()), vec![(0, 2), (1, 3)]);
}

#[test]
fn all_four_families() {
    assert_eq!(
        pairs("(){}[]<>", &TokenizerConfig::empty()),
        vec![(0, 1), (2, 3), (4, 5), (6, 7)]
    );
}

#[test]
fn unmatched_brackets_self_link() {
    let all = links("(a))", &TokenizerConfig::empty());
    assert_eq!(all, vec![(0, 2), (1, 1), (2, 0), (3, 3)]);
    let all = links("((", &TokenizerConfig::empty());
    assert_eq!(all, vec![(0, 0), (1, 1)]);
}

#[test]
fn deep_nesting_does_not_recurse() {
    let depth = 100_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let all = links(&source, &TokenizerConfig::empty());
    assert_eq!(all[0].1, 2 * depth - 1);
    assert_eq!(all[depth - 1].1, depth);
}

#[test]
fn multi_byte_lexemes_are_not_brackets() {
    let config = TokenizerConfig::empty().with_block_comment(DelimiterPair::html_block());
    // <!-- x --> >
    assert!(pairs("<!-- x --> >", &config).is_empty());
}

// === Strings ===

#[test]
fn string_quotes_link() {
    // " a " b
    assert_eq!(pairs("\"a\" b", &c_config()), vec![(0, 2)]);
}

#[test]
fn brackets_inside_strings_stay_inside() {
    // ( " ( " )
    // 0 1 2 3 4
    assert_eq!(pairs("(\"(\")", &c_config()), vec![(0, 4), (1, 3)]);
}

#[test]
fn brackets_inside_strings_match_each_other() {
    // " ( x ) "
    // 0 1 2 3 4
    assert_eq!(pairs("\"(x)\"", &c_config()), vec![(0, 4), (1, 3)]);
}

#[test]
fn unterminated_string_open_quote_self_links() {
    // " ( a
    let all = links("\"(a", &c_config());
    assert_eq!(all, vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn escaped_quote_stays_inside_string() {
    // " a \ " b "
    // 0 1 2 3 4 5
    assert_eq!(pairs(r#""a\"b""#, &c_config()), vec![(0, 5)]);
}

// === Unclassified quotes ===

#[test]
fn quotes_link_when_strings_are_not_configured() {
    // ` ( x ) ` y
    // 0 1 2 3 4 5
    assert_eq!(pairs("`(x)` y", &c_config()), vec![(0, 4), (1, 3)]);
}

#[test]
fn quotes_link_when_strings_are_disabled() {
    let config = c_config().with_highlight(Highlight::all() - Highlight::STRINGS);
    assert_eq!(pairs("'a'", &config), vec![(0, 2)]);
}

#[test]
fn unclassified_quote_respects_escapes() {
    // ` \ ` `
    // 0 1 2 3
    assert_eq!(pairs("`\\``", &TokenizerConfig::empty()), vec![(0, 3)]);
}

#[test]
fn lone_unclassified_quote_self_links() {
    assert!(pairs("don't (x)", &TokenizerConfig::empty())
        .iter()
        .all(|&(i, _)| i != 1));
}

// === Comments ===

#[test]
fn apostrophes_in_comments_are_not_quotes() {
    // // ␣ don ' t ␣ ( x )
    // 0 1 2   3 4 5 6 7 8
    assert_eq!(pairs("// don't (x)", &c_config()), vec![(6, 8)]);
}

#[test]
fn double_quotes_in_comments_link() {
    // // ␣ " a " ␣ (
    // 0 1 2 3 4 5 6
    assert_eq!(pairs("// \"a\" (", &c_config()), vec![(2, 4)]);
}

#[test]
fn comment_brackets_do_not_leak_into_code() {
    // ( ␣ /* ␣ ) ␣ */ ␣ )
    // 0 1 2  3 4 5 6  7 8
    assert_eq!(pairs("( /* ) */ )", &c_config()), vec![(0, 8)]);
}

#[test]
fn comment_interior_brackets_match() {
    // // ␣ ( )
    // 0 1 2 3
    assert_eq!(pairs("// ()", &c_config()), vec![(2, 3)]);
}

#[test]
fn non_delimiters_self_link() {
    let all = links("abc 1.5 x", &TokenizerConfig::empty());
    assert!(all.iter().all(|&(i, link)| i == link));
}

// === Quote search cost ===

/// Links plus the number of candidate closers examined.
fn scan_count(source: &[u8], config: &TokenizerConfig) -> (Vec<usize>, usize) {
    let out = classify(source, &scan(source), config);
    let mut resolver = Resolver::new(source, &out.lexemes);
    resolver.run(&out.regions);
    (resolver.links, resolver.quote_scans)
}

#[test]
fn escaped_quote_run_is_searched_once() {
    let source = b"\\'".repeat(40_000);
    let (links, scans) = scan_count(&source, &TokenizerConfig::empty());
    assert_eq!(links.len(), 80_000);
    assert!(links.iter().enumerate().all(|(i, &link)| i == link));
    assert!(scans <= links.len(), "{scans} scans for {} lexemes", links.len());
}

#[test]
fn escaped_json_in_block_comment_is_searched_once() {
    let mut source = b"/* ".to_vec();
    for _ in 0..5_000 {
        source.extend_from_slice(b"{\\\"a\\\":\\\"b\\\"},");
    }
    source.extend_from_slice(b" */");
    let (links, scans) = scan_count(&source, &c_config());
    assert!(scans <= links.len(), "{scans} scans for {} lexemes", links.len());
    // /* ␣ { \ " a \ " : \ " b \ " } ,
    // 0  1 2                         14
    assert_eq!(links[2], 14);
}

#[test]
fn failed_quote_does_not_block_other_quote_bytes() {
    // ' ␣ " a "
    // 0 1 2 3 4
    assert_eq!(pairs("' \"a\"", &TokenizerConfig::empty()), vec![(2, 4)]);
}

#[test]
fn escaped_opener_still_pairs_with_later_quote() {
    // \ ' ␣ ' a '
    // 0 1 2 3 4 5
    assert_eq!(pairs("\\' 'a'", &TokenizerConfig::empty()), vec![(1, 3)]);
}
