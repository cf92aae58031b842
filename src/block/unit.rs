//! Block-level unit types.

use crate::inline::InlineToken;

/// Paragraph alignment, written into the `text-align` style.
///
/// Alignment words are not validated: anything the directive captures that
/// is not one of the known keywords is kept as [`Justify::Other`] and written
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify<'a> {
    /// `left` (the default).
    #[default]
    Left,
    /// `center`.
    Center,
    /// `right`.
    Right,
    /// `justify`.
    Justify,
    /// Any other word.
    Other(&'a str),
}

impl<'a> Justify<'a> {
    /// Interpret an alignment word.
    pub fn from_word(word: &'a str) -> Self {
        match word {
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            "justify" => Self::Justify,
            other => Self::Other(other),
        }
    }

    /// CSS value for `text-align`.
    pub fn as_str(self) -> &'a str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
            Self::Other(word) => word,
        }
    }
}

/// A top-level unit of the document, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`..`######` heading. The content is never inline-parsed.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Raw text after the hashes and their whitespace.
        content: &'a str,
    },

    /// Consecutive `- item` lines.
    List {
        /// Raw item texts; tokenized when the tree is built.
        items: Vec<&'a str>,
    },

    /// Any other non-blank line.
    Paragraph {
        /// Line text with any alignment directive removed.
        text: &'a str,
        /// Tokens of `text`.
        tokens: Vec<InlineToken>,
        /// Alignment from a `[[!align:WORD]]` prefix, if present.
        align: Option<Justify<'a>>,
    },

    /// A fenced region, delimiter lines included, collapsed into one unit.
    /// Rendered like a paragraph without alignment.
    CodeFence {
        /// Source text of the whole region.
        text: &'a str,
        /// Tokens of `text`.
        tokens: Vec<InlineToken>,
    },

    /// A blank line.
    Newline,
}
