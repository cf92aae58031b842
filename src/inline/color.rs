//! Colored spans: `[fg:COLOR]inner[/fg]`.
//!
//! COLOR is either a run of `#` and word characters (`#ff0000`, `red`) or a
//! functional `rgb(...)` / `rgba(...)` value. The span ends at the first
//! `[/fg]` on the same line, so an inner colored span can never be complete.

use super::lookahead::Lookahead;
use super::token::InlineToken;
use crate::Range;

const OPEN: &[u8] = b"[fg:";
const CLOSE_LEN: usize = b"[/fg]".len();

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan the color value starting at `start`; returns the end of the value.
/// The byte at the returned position is always `]`.
fn scan_color(text: &[u8], start: usize, lookahead: &mut Lookahead) -> Option<usize> {
    let word_end = text[start..]
        .iter()
        .position(|&b| !(is_word_byte(b) || b == b'#'))
        .map_or(text.len(), |offset| start + offset);
    if word_end > start && text.get(word_end) == Some(&b']') {
        return Some(word_end);
    }

    let rest = &text[start..];
    let args_start = if rest.starts_with(b"rgb(") {
        start + 4
    } else if rest.starts_with(b"rgba(") {
        start + 5
    } else {
        return None;
    };
    let close = lookahead.close_paren.find(text, args_start)?;
    if close == args_start || text.get(close + 1) != Some(&b']') {
        return None;
    }
    Some(close + 1)
}

/// Scan a colored span starting at the `[` at `pos`.
pub fn scan_colored_span(
    text: &[u8],
    pos: usize,
    lookahead: &mut Lookahead,
) -> Option<(InlineToken, usize)> {
    if !text[pos..].starts_with(OPEN) {
        return None;
    }
    let color_start = pos + OPEN.len();
    let color_end = scan_color(text, color_start, lookahead)?;

    let inner_start = color_end + 1;
    let close = lookahead.color_close.find(text, inner_start)?;
    if lookahead
        .newline
        .find(text, inner_start)
        .is_some_and(|nl| nl < close)
    {
        return None;
    }

    let token = InlineToken::ColoredSpan {
        color: Range::from_usize(color_start, color_end),
        inner: Range::from_usize(inner_start, close),
    };
    Some((token, close + CLOSE_LEN))
}
