//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! keeps the allocation a whole number of cache lines.
//!
//! Source bytes are taken as-is. No encoding is assumed: the tokenizer
//! classifies by raw byte and ASCII range only.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// The input was longer than [`Self::MAX_LEN`] and got cut.
    truncated: bool,
}

impl SourceBuffer {
    /// Largest source kept whole. Offsets are 32-bit so a
    /// [`RawToken`](crate::RawToken) stays at 8 bytes.
    pub const MAX_LEN: u32 = u32::MAX;

    /// Create a new sentinel-terminated buffer from source bytes.
    ///
    /// Sources longer than [`Self::MAX_LEN`] keep only their first
    /// `MAX_LEN` bytes; [`is_truncated`](Self::is_truncated) reports it.
    pub fn new(source: &[u8]) -> Self {
        Self::with_limit(source, Self::MAX_LEN)
    }

    pub(crate) fn with_limit(source: &[u8], limit: u32) -> Self {
        let source_len_u32 = u32::try_from(source.len()).map_or(limit, |len| len.min(limit));
        let truncated = source.len() > source_len_u32 as usize;
        let source = &source[..source_len_u32 as usize];
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        Self {
            buf,
            source_len: source_len_u32,
            truncated,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// `true` if the input exceeded [`Self::MAX_LEN`].
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Size assertion: `SourceBuffer` should stay within one cache line.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
