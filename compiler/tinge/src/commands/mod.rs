//! Command implementations for the `tinge` binary.

mod lex;

pub use lex::{dump_tokens, lex_file, lex_source};

use tinge_lexer::UnknownLanguage;

/// Errors surfaced to the user by a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
}

/// Read a source file as raw bytes. No encoding is assumed.
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, CommandError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CommandError::NotFound {
            path: path.to_owned(),
        },
        std::io::ErrorKind::PermissionDenied => CommandError::PermissionDenied {
            path: path.to_owned(),
        },
        _ => CommandError::Read {
            path: path.to_owned(),
            source: e,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let err = read_file("definitely/not/here.c").unwrap_err();
        assert!(matches!(err, CommandError::NotFound { .. }));
        assert_eq!(err.to_string(), "cannot find file 'definitely/not/here.c'");
    }

    #[test]
    fn unknown_language_converts() {
        let err: CommandError = "cobol".parse::<tinge_lexer::Language>().unwrap_err().into();
        assert!(err.to_string().starts_with("unknown language `cobol`"));
    }
}
