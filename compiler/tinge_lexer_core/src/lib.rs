//! Low-level run scanner for tinge.
//!
//! Splits raw source bytes into maximal-munch runs (words, spaces, tabs,
//! newlines, single "other" bytes). Nothing here knows about keywords,
//! strings, comments or brackets; that is the classifier's job in
//! `tinge_lexer`.
//!
//! ```text
//! &[u8] → SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{is_word_byte, scan, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
