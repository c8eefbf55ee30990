//! File-type presets: extension → [`TokenizerConfig`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::{DelimiterPair, KeywordSet, TokenizerConfig};
use crate::keywords;

/// A language name that no preset answers to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown language `{name}` (expected one of: c, go, python, markup, plain)")]
pub struct UnknownLanguage {
    pub name: String,
}

/// Source languages with a built-in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// C and C++ sources and headers.
    C,
    Go,
    Python,
    /// HTML and Markdown: only `<!-- -->` comments and `"` strings.
    Markup,
    /// Anything unrecognised. Maps to the empty configuration.
    Plain,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::C,
        Language::Go,
        Language::Python,
        Language::Markup,
        Language::Plain,
    ];

    /// Pick a preset from a file extension (without the dot).
    ///
    /// Matching is exact and case-sensitive, like the extensions editors
    /// write. Unrecognised extensions give [`Language::Plain`].
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "c" | "cpp" | "h" => Self::C,
            "go" => Self::Go,
            "py" => Self::Python,
            "md" | "html" => Self::Markup,
            _ => Self::Plain,
        }
    }

    /// Pick a preset from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Plain, Self::from_extension)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Go => "go",
            Self::Python => "python",
            Self::Markup => "markup",
            Self::Plain => "plain",
        }
    }

    /// Build the tokenizer configuration for this language.
    pub fn config(self) -> TokenizerConfig {
        let commented =
            || TokenizerConfig::empty().with_comment_keywords(keyword_set(keywords::COMMENT_KEYWORDS));
        match self {
            Self::C => commented()
                .with_code_keywords(keyword_set(keywords::C_KEYWORDS))
                .with_line_comment(DelimiterPair::c_line())
                .with_block_comment(DelimiterPair::c_block())
                .with_quotes(b"\"'"),
            Self::Go => commented()
                .with_code_keywords(keyword_set(keywords::GO_KEYWORDS))
                .with_line_comment(DelimiterPair::c_line())
                .with_block_comment(DelimiterPair::c_block())
                .with_quotes(b"\"'`"),
            Self::Python => commented()
                .with_code_keywords(keyword_set(keywords::PYTHON_KEYWORDS))
                .with_line_comment(DelimiterPair::hash_line())
                .with_quotes(b"\"'"),
            Self::Markup => commented()
                .with_block_comment(DelimiterPair::html_block())
                .with_quotes(b"\""),
            Self::Plain => TokenizerConfig::empty(),
        }
    }
}

fn keyword_set(words: &[&str]) -> KeywordSet {
    words.iter().collect()
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "cpp" | "c++" | "h" => Ok(Self::C),
            "go" => Ok(Self::Go),
            "python" | "py" => Ok(Self::Python),
            "markup" | "html" | "md" | "markdown" => Ok(Self::Markup),
            "plain" | "text" | "txt" => Ok(Self::Plain),
            _ => Err(UnknownLanguage { name: s.to_owned() }),
        }
    }
}
