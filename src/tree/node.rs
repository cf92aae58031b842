//! Document tree node types.

use crate::block::Justify;

/// A node of the document tree.
///
/// Nodes borrow their text from the source; a tree is built fresh for every
/// compile pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// Plain text, written verbatim.
    Text(&'a str),
    /// `<strong>` span.
    Bold(Vec<Node<'a>>),
    /// `<em>` span.
    Italic(Vec<Node<'a>>),
    /// `<u>` span.
    Underlined(Vec<Node<'a>>),
    /// Colored span; its children come from re-tokenizing the inner text.
    ColoredText {
        color: &'a str,
        children: Vec<Node<'a>>,
    },
    /// Single-backtick code.
    InlineCode(&'a str),
    /// Triple-backtick code.
    BlockCode(&'a str),
    Hyperlink {
        href: &'a str,
        text: &'a str,
    },
    Image {
        src: &'a str,
        alt: &'a str,
        width: &'a str,
    },
    /// Heading with raw, unparsed content.
    Heading { level: u8, content: &'a str },
    Paragraph {
        children: Vec<Node<'a>>,
        justify: Justify<'a>,
    },
    /// Unordered list; one child sequence per item.
    List { items: Vec<Vec<Node<'a>>> },
}

impl Node<'_> {
    /// Check whether this node is an inline node (may appear as a child of a
    /// paragraph or list item).
    pub fn is_inline(&self) -> bool {
        !matches!(
            self,
            Self::Heading { .. } | Self::Paragraph { .. } | Self::List { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_classification() {
        assert!(Node::Text("x").is_inline());
        assert!(Node::Bold(Vec::new()).is_inline());
        assert!(Node::BlockCode("x").is_inline());
        assert!(!Node::Heading { level: 1, content: "x" }.is_inline());
        assert!(!Node::List { items: Vec::new() }.is_inline());
    }
}
