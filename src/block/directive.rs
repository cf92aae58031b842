//! Line-level directive recognition.
//!
//! These helpers look only at the start of a single line and never allocate.

use crate::limits::MAX_HEADING_LEVEL;

use super::unit::Justify;

const ALIGN_OPEN: &str = "[[!align:";
const ALIGN_CLOSE: &str = "]]";
const FENCE: &str = "```";

/// Strip a leading `[[!align:WORD]]` directive.
///
/// Returns the captured alignment and the rest of the line. WORD is one or
/// more ASCII word characters.
pub fn strip_alignment(line: &str) -> (Option<Justify<'_>>, &str) {
    let Some(rest) = line.strip_prefix(ALIGN_OPEN) else {
        return (None, line);
    };
    let word_len = rest
        .bytes()
        .position(|b| !(b.is_ascii_alphanumeric() || b == b'_'))
        .unwrap_or(rest.len());
    if word_len == 0 {
        return (None, line);
    }
    match rest[word_len..].strip_prefix(ALIGN_CLOSE) {
        Some(after) => (Some(Justify::from_word(&rest[..word_len])), after),
        None => (None, line),
    }
}

/// Recognize an ATX heading: 1-6 `#`, whitespace, then content.
///
/// All whitespace after the hashes is consumed; the content may be empty.
pub fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL as usize {
        return None;
    }
    let content = after_whitespace(&line[hashes..])?;
    Some((hashes as u8, content))
}

/// Recognize a list item: `-`, whitespace, then content.
pub fn list_item(line: &str) -> Option<&str> {
    after_whitespace(line.strip_prefix('-')?)
}

/// Check whether a line opens or closes a fenced region.
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Check whether a line is blank.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Require at least one whitespace character and skip all of it.
fn after_whitespace(s: &str) -> Option<&str> {
    if !s.starts_with(char::is_whitespace) {
        return None;
    }
    Some(s.trim_start())
}
