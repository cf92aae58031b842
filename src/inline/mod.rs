//! Inline tokenizer.
//!
//! A single left-to-right scan. At each position the constructs are tried in
//! priority order and the first that matches wins:
//! 1. Code spans (triple, then single backticks)
//! 2. Colored spans `[fg:COLOR]...[/fg]`
//! 3. Links and images `[label](url)`
//! 4. Emphasis markers `**`, `__`, `_`
//! 5. Plain text up to the next structural delimiter
//!
//! A delimiter that starts none of these is kept as text, so tokenization
//! never fails and every byte ends up in exactly one token.

mod code_span;
mod color;
mod links;
mod lookahead;
pub mod marks;
pub mod token;

pub use token::{InlineToken, SpanKind};

use crate::cursor::Cursor;
use crate::Range;
use code_span::scan_code_span;
use color::scan_colored_span;
use links::scan_link;
use lookahead::Lookahead;
use marks::{is_structural, scan_marker, text_run_end};

/// Inline tokenizer state.
///
/// Holds only lookahead caches, so one tokenizer can be reused for any
/// number of texts.
#[derive(Debug, Default)]
pub struct InlineTokenizer {
    lookahead: Lookahead,
}

impl InlineTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self {
            lookahead: Lookahead::new(),
        }
    }

    /// Tokenize `text` into a new token vector.
    pub fn tokenize(&mut self, text: &str) -> Vec<InlineToken> {
        let mut tokens = Vec::with_capacity((text.len() / 8).max(4));
        self.tokenize_into(text, &mut tokens);
        tokens
    }

    /// Tokenize `text`, appending tokens to `tokens`.
    pub fn tokenize_into(&mut self, text: &str, tokens: &mut Vec<InlineToken>) {
        self.lookahead.reset();
        let bytes = text.as_bytes();
        let mut cursor = Cursor::new(bytes);
        // Tokens emitted for this text start here; text merging must not
        // reach back into tokens that belong to an earlier call.
        let first = tokens.len();

        while let Some(b) = cursor.peek() {
            let pos = cursor.offset();
            let scanned = match b {
                b'`' => scan_code_span(bytes, pos, &mut self.lookahead.backtick),
                b'[' => scan_colored_span(bytes, pos, &mut self.lookahead)
                    .or_else(|| scan_link(bytes, pos, &mut self.lookahead)),
                b'*' | b'_' => scan_marker(bytes, pos)
                    .map(|(kind, end)| (InlineToken::Marker(kind), end)),
                _ if is_structural(b) => None,
                _ => {
                    let end = text_run_end(bytes, pos);
                    push_text(tokens, first, Range::from_usize(pos, end));
                    cursor.jump_to(end);
                    continue;
                }
            };

            match scanned {
                Some((token, end)) => {
                    tokens.push(token);
                    cursor.jump_to(end);
                }
                None => {
                    push_text(tokens, first, Range::from_usize(pos, pos + 1));
                    cursor.advance(1);
                }
            }
        }
    }
}

/// Append a text range, merging it into a directly preceding text token.
#[inline]
fn push_text(tokens: &mut Vec<InlineToken>, first: usize, range: Range) {
    if tokens.len() > first {
        if let Some(InlineToken::Text(prev)) = tokens.last_mut() {
            if prev.end == range.start {
                prev.extend_to(range.end);
                return;
            }
        }
    }
    tokens.push(InlineToken::Text(range));
}

/// Tokenize one block of inline text.
///
/// # Example
/// ```
/// use huemark::inline::{tokenize, InlineToken, SpanKind};
///
/// let tokens = tokenize("**hi**");
/// assert_eq!(tokens[0], InlineToken::Marker(SpanKind::Bold));
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(text: &str) -> Vec<InlineToken> {
    InlineTokenizer::new().tokenize(text)
}
