//! Emphasis markers and plain-text runs.

use super::token::SpanKind;

/// Bytes that may start a construct and therefore end a plain-text run.
const STRUCTURAL_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'`' as usize] = true;
    table[b'[' as usize] = true;
    table[b']' as usize] = true;
    table[b'(' as usize] = true;
    table[b')' as usize] = true;
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table
};

/// Check if a byte is one of the structural delimiters.
#[inline]
pub fn is_structural(b: u8) -> bool {
    STRUCTURAL_TABLE[b as usize]
}

/// End of the maximal plain-text run starting at `pos`.
#[inline]
pub fn text_run_end(text: &[u8], pos: usize) -> usize {
    text[pos..]
        .iter()
        .position(|&b| is_structural(b))
        .map_or(text.len(), |offset| pos + offset)
}

/// Scan an emphasis marker at `pos`.
///
/// `__` is tried before `_`, so a pair of underscores is always one
/// underline marker. A single `*` is not a marker.
#[inline]
pub fn scan_marker(text: &[u8], pos: usize) -> Option<(SpanKind, usize)> {
    let rest = &text[pos..];
    if rest.starts_with(b"**") {
        Some((SpanKind::Bold, pos + 2))
    } else if rest.starts_with(b"__") {
        Some((SpanKind::Underline, pos + 2))
    } else if rest.starts_with(b"_") {
        Some((SpanKind::Italic, pos + 1))
    } else {
        None
    }
}
