//! Inline token types.

use crate::Range;

/// Kind of an emphasis span opened or closed by a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// `**`
    Bold,
    /// `_`
    Italic,
    /// `__`
    Underline,
}

impl SpanKind {
    /// The marker text that produces this span.
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "_",
            Self::Underline => "__",
        }
    }
}

/// Tokens emitted by the inline tokenizer.
///
/// All ranges are relative to the text that was tokenized. Tokens carry no
/// nesting; markers are paired up later by the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToken {
    /// Content between triple backticks.
    BlockCode(Range),

    /// Content between single backticks.
    InlineCode(Range),

    /// `[fg:COLOR]inner[/fg]`. The inner text is tokenized again when the
    /// tree is built.
    ColoredSpan {
        /// Color value, passed through verbatim.
        color: Range,
        /// Text between `]` and `[/fg]`.
        inner: Range,
    },

    /// `[label](url)` where the label does not start with `img`.
    Link {
        /// Display text.
        label: Range,
        /// Destination, passed through verbatim.
        url: Range,
    },

    /// `[img-WIDTH:ALT](src)`.
    Image {
        /// Declared width; not validated.
        width: Range,
        /// Alt text, empty when the label has no `:`.
        alt: Range,
        /// Image source.
        src: Range,
    },

    /// Emphasis marker.
    Marker(SpanKind),

    /// Plain text, including delimiters that matched no construct.
    Text(Range),
}
