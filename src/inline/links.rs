//! Link and image parsing.
//!
//! Handles `[label](url)`. A label that starts with `img` turns the link into
//! an image directive encoded as `img-WIDTH:ALT`.

use super::lookahead::Lookahead;
use super::token::InlineToken;
use crate::Range;

const IMAGE_PREFIX: &str = "img";

/// Scan a link or image starting at the `[` at `pos`.
///
/// The label runs to the first `]`, which must be followed by `(`; the
/// destination runs to the first `)`. Both must be non-empty.
pub fn scan_link(
    text: &[u8],
    pos: usize,
    lookahead: &mut Lookahead,
) -> Option<(InlineToken, usize)> {
    debug_assert_eq!(text.get(pos), Some(&b'['));

    let label_start = pos + 1;
    let label_end = lookahead.close_bracket.find(text, label_start)?;
    if label_end == label_start || text.get(label_end + 1) != Some(&b'(') {
        return None;
    }

    let url_start = label_end + 2;
    let url_end = lookahead.close_paren.find(text, url_start)?;
    if url_end == url_start {
        return None;
    }

    let label = Range::from_usize(label_start, label_end);
    let url = Range::from_usize(url_start, url_end);
    let token = if text[label_start..label_end].starts_with(IMAGE_PREFIX.as_bytes()) {
        let (width, alt) = split_image_label(text, label);
        InlineToken::Image {
            width,
            alt,
            src: url,
        }
    } else {
        InlineToken::Link { label, url }
    };
    Some((token, url_end + 1))
}

/// Split an `img-WIDTH:ALT` label into width and alt ranges.
///
/// The width is the last `-` separated piece of everything before the first
/// `:`; the alt is the piece between the first and second `:`. Neither is
/// validated, so `img:cat` has width `img`.
fn split_image_label(text: &[u8], label: Range) -> (Range, Range) {
    let bytes = &text[label.start_usize()..label.end_usize()];
    let head_len = memchr::memchr(b':', bytes).unwrap_or(bytes.len());
    let width_start = memchr::memrchr(b'-', &bytes[..head_len]).map_or(0, |dash| dash + 1);
    let width = Range::from_usize(
        label.start_usize() + width_start,
        label.start_usize() + head_len,
    );

    let alt = if head_len < bytes.len() {
        let alt_start = head_len + 1;
        let alt_len = memchr::memchr(b':', &bytes[alt_start..]).unwrap_or(bytes.len() - alt_start);
        Range::from_usize(
            label.start_usize() + alt_start,
            label.start_usize() + alt_start + alt_len,
        )
    } else {
        Range::empty_at(label.end)
    };

    (width, alt)
}
