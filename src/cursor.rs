//! Byte cursor for forward-only scanning.
//!
//! All structural characters of the dialect are ASCII, so scanning happens on
//! bytes and the resulting offsets are always valid `str` boundaries.

use crate::Range;

/// A cursor for byte-by-byte scanning over a text.
///
/// # Example
/// ```
/// use huemark::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"**bold**");
///
/// cursor.advance(2);
/// assert_eq!(cursor.peek(), Some(b'b'));
/// assert_eq!(cursor.remaining_slice(), b"bold**");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Move to an absolute offset at or after the current one.
    #[inline]
    pub fn jump_to(&mut self, offset: usize) {
        debug_assert!(offset >= self.pos);
        self.advance(offset - self.pos);
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Find the next newline relative to the current position.
    #[inline]
    pub fn find_newline(&self) -> Option<usize> {
        memchr::memchr(b'\n', self.remaining_slice())
    }

    /// Iterate the remaining input as `\n`-separated line ranges.
    ///
    /// Behaves like `str::split('\n')`: a trailing newline yields a final
    /// empty line and empty input yields one empty line.
    #[inline]
    pub fn lines(self) -> LineRanges<'a> {
        LineRanges {
            cursor: self,
            done: false,
        }
    }
}

/// Iterator returned by [`Cursor::lines`].
#[derive(Debug)]
pub struct LineRanges<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl Iterator for LineRanges<'_> {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        if self.done {
            return None;
        }
        let start = self.cursor.offset();
        match self.cursor.find_newline() {
            Some(pos) => {
                self.cursor.advance(pos + 1);
                Some(Range::from_usize(start, start + pos))
            }
            None => {
                self.done = true;
                let end = start + self.cursor.remaining();
                self.cursor.advance(self.cursor.remaining());
                Some(Range::from_usize(start, end))
            }
        }
    }
}
