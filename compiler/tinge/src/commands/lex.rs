//! `tinge lex`: print the token stream of a file.

use std::fmt::Write as _;
use std::path::Path;

use tinge_lexer::{tokenize, Language, TokenList};

use super::{read_file, CommandError};

/// Tokenize `path` and print its tokens.
///
/// `lang` overrides the language detected from the file extension.
pub fn lex_file(path: &str, lang: Option<&str>) -> Result<(), CommandError> {
    let language = match lang {
        Some(name) => name.parse()?,
        None => Language::from_path(Path::new(path)),
    };
    let source = read_file(path)?;
    let tokens = lex_source(&source, language);

    println!(
        "Tokens for '{path}' ({} tokens, language: {language}):",
        tokens.len()
    );
    print!("{}", dump_tokens(&tokens));
    Ok(())
}

/// Tokenize `source` with the preset for `language`.
pub fn lex_source(source: &[u8], language: Language) -> TokenList {
    let config = language.config();
    tokenize(source, Some(&config))
}

/// One line per token: `KIND(text)(len) -> link`.
///
/// Text is escaped so newlines and control bytes stay on one line.
pub fn dump_tokens(tokens: &TokenList) -> String {
    let mut out = String::new();
    for token in tokens {
        let text = String::from_utf8_lossy(&token.text);
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}({})({}) -> {}",
            token.kind.name(),
            text.escape_debug(),
            token.len(),
            token.scope_link
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dump_format() {
        let tokens = lex_source(b"f(1)", Language::C);
        assert_eq!(
            dump_tokens(&tokens),
            "WORD(f)(1) -> 0\n\
             WORD(()(1) -> 3\n\
             NUMBER(1)(1) -> 2\n\
             WORD())(1) -> 1\n\
             NEWLINE(\\n)(1) -> 4\n"
        );
    }

    #[test]
    fn dump_shows_expanded_tab_length() {
        let tokens = lex_source(b"\t", Language::Plain);
        assert_eq!(dump_tokens(&tokens).lines().next(), Some("TABS(    )(4) -> 0"));
    }

    #[test]
    fn dump_python_comment() {
        let tokens = lex_source(b"# TODO\n", Language::Python);
        assert_eq!(
            dump_tokens(&tokens),
            "COMMENT(#)(1) -> 0\n\
             COMMENT( )(1) -> 1\n\
             COMMENT_KEYWORD(TODO)(4) -> 2\n\
             NEWLINE(\\n)(1) -> 3\n"
        );
    }
}
