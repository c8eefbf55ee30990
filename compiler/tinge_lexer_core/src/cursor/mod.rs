//! Byte cursor for the run scanner.
//!
//! Reads past the last source byte land on the `0x00` sentinel that
//! [`SourceBuffer`](crate::SourceBuffer) appends, so the scanner's loops
//! need no length checks of their own. A `0x00` inside the source is an
//! ordinary byte; only a zero at or past `source_len` means end of input.

/// Forward-only position in a sentinel-terminated buffer.
///
/// `buf[source_len]` and everything after it are `0x00`. Cheap to copy,
/// so the scanner can snapshot a run's start.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len() && buf[source_len as usize] == 0,
            "buffer must end in a 0x00 sentinel"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` at the end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// `true` once the cursor sits on the sentinel, not on an interior NUL.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len && self.current() == 0
    }

    /// Byte offset from the start of the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Skip bytes matching `pred`.
    ///
    /// `pred(0)` must be `false` so the walk halts on the sentinel.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }
}
