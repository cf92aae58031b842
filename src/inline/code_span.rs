//! Code spans.
//!
//! Code spans have the highest precedence among inline constructs. Their
//! content is never tokenized further and may not contain a backtick.

use super::lookahead::NextByte;
use super::token::InlineToken;
use crate::Range;

const FENCE: &[u8] = b"```";

/// Scan a code span starting at the backtick at `pos`.
///
/// Tries the triple-backtick form first, then the single-backtick form.
/// Returns the token and the position after the closing delimiter.
pub fn scan_code_span(
    text: &[u8],
    pos: usize,
    backticks: &mut NextByte,
) -> Option<(InlineToken, usize)> {
    debug_assert_eq!(text.get(pos), Some(&b'`'));

    if text[pos..].starts_with(FENCE) {
        let content_start = pos + FENCE.len();
        if let Some(close) = backticks.find(text, content_start) {
            if close > content_start && text[close..].starts_with(FENCE) {
                let token = InlineToken::BlockCode(Range::from_usize(content_start, close));
                return Some((token, close + FENCE.len()));
            }
        }
    }

    let content_start = pos + 1;
    let close = backticks.find(text, content_start)?;
    if close == content_start {
        return None;
    }
    let token = InlineToken::InlineCode(Range::from_usize(content_start, close));
    Some((token, close + 1))
}
