//! Raw run tags produced by the scanner.

/// Category of a raw run.
///
/// The discriminants are stable and fit in one byte so a [`RawToken`]
/// packs into 8 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Maximal run of ASCII letters, digits and `_`.
    Word = 0,
    /// Maximal run of `' '`.
    Spaces = 1,
    /// Maximal run of `'\t'`.
    Tabs = 2,
    /// Exactly one `'\n'`.
    Newline = 3,
    /// Any other single byte: punctuation, quotes, brackets, `'\r'`,
    /// non-ASCII bytes and interior NULs.
    Other = 4,
    /// End of input. Always has `len == 0`.
    Eof = 255,
}

/// A raw run: its tag and its byte length.
///
/// The scanner does not track positions; callers sum lengths to recover
/// offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
