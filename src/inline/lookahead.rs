//! Memoized forward searches for closing delimiters.
//!
//! Every construct is closed by the *first* occurrence of its closing
//! delimiter, so a failed search from one opener answers the same question
//! for every later opener before the searched-from position's result. Caching
//! the last answer keeps a line full of unmatched openers linear.

use memchr::memchr;
use memchr::memmem;

/// Cached "next occurrence of a byte at or after `pos`".
#[derive(Debug, Clone, Copy)]
pub struct NextByte {
    needle: u8,
    cached: Option<(usize, Option<usize>)>,
}

impl NextByte {
    pub const fn new(needle: u8) -> Self {
        Self {
            needle,
            cached: None,
        }
    }

    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// Absolute position of the next `needle` at or after `pos`.
    pub fn find(&mut self, haystack: &[u8], pos: usize) -> Option<usize> {
        if let Some((from, found)) = self.cached {
            if pos >= from && found.is_none_or(|at| pos <= at) {
                return found;
            }
        }
        let found = haystack
            .get(pos..)
            .and_then(|rest| memchr(self.needle, rest))
            .map(|at| pos + at);
        self.cached = Some((pos, found));
        found
    }
}

/// Cached "next occurrence of a byte sequence at or after `pos`".
#[derive(Debug, Clone, Copy)]
pub struct NextSeq {
    needle: &'static [u8],
    cached: Option<(usize, Option<usize>)>,
}

impl NextSeq {
    pub const fn new(needle: &'static [u8]) -> Self {
        Self {
            needle,
            cached: None,
        }
    }

    pub fn reset(&mut self) {
        self.cached = None;
    }

    pub fn find(&mut self, haystack: &[u8], pos: usize) -> Option<usize> {
        if let Some((from, found)) = self.cached {
            if pos >= from && found.is_none_or(|at| pos <= at) {
                return found;
            }
        }
        let found = haystack
            .get(pos..)
            .and_then(|rest| memmem::find(rest, self.needle))
            .map(|at| pos + at);
        self.cached = Some((pos, found));
        found
    }
}

/// All lookaheads used while tokenizing one text.
#[derive(Debug, Clone, Copy)]
pub struct Lookahead {
    pub backtick: NextByte,
    pub close_bracket: NextByte,
    pub close_paren: NextByte,
    pub newline: NextByte,
    pub color_close: NextSeq,
}

impl Lookahead {
    pub const fn new() -> Self {
        Self {
            backtick: NextByte::new(b'`'),
            close_bracket: NextByte::new(b']'),
            close_paren: NextByte::new(b')'),
            newline: NextByte::new(b'\n'),
            color_close: NextSeq::new(b"[/fg]"),
        }
    }

    /// Forget cached answers before scanning a new text.
    pub fn reset(&mut self) {
        self.backtick.reset();
        self.close_bracket.reset();
        self.close_paren.reset();
        self.newline.reset();
        self.color_close.reset();
    }
}

impl Default for Lookahead {
    fn default() -> Self {
        Self::new()
    }
}
