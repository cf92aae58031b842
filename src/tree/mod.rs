//! Tree builder.
//!
//! Pairs up emphasis markers with an explicit stack of open spans:
//! - A marker whose kind equals the innermost open span closes that span.
//! - Any other marker opens a new span, even inside a span of another kind.
//!   The stack is never searched for an older span of the same kind, so
//!   interleaved markers like `**a _b** c_` nest instead of crossing.
//! - Spans still open at the end of the block are closed innermost first.
//!
//! Colored spans and list items are tokenized and built recursively, each
//! with a fresh stack.

mod node;

pub use node::Node;

use smallvec::SmallVec;

use crate::block::Block;
use crate::inline::{InlineToken, InlineTokenizer, SpanKind};
use crate::limits::MAX_SPAN_NESTING;
use crate::Options;

/// An emphasis span whose closing marker has not been seen yet.
#[derive(Debug)]
struct OpenSpan<'a> {
    kind: SpanKind,
    children: Vec<Node<'a>>,
}

impl<'a> OpenSpan<'a> {
    fn into_node(self) -> Node<'a> {
        match self.kind {
            SpanKind::Bold => Node::Bold(self.children),
            SpanKind::Italic => Node::Italic(self.children),
            SpanKind::Underline => Node::Underlined(self.children),
        }
    }
}

/// Stack of open spans over the list of completed top-level nodes.
#[derive(Debug, Default)]
struct SpanStack<'a> {
    open: SmallVec<[OpenSpan<'a>; 8]>,
    root: Vec<Node<'a>>,
}

impl<'a> SpanStack<'a> {
    /// Append a node to the innermost open span, or to the top level.
    fn append(&mut self, node: Node<'a>) {
        debug_assert!(node.is_inline());
        match self.open.last_mut() {
            Some(span) => span.children.push(node),
            None => self.root.push(node),
        }
    }

    fn marker(&mut self, kind: SpanKind) {
        if self.open.last().is_some_and(|top| top.kind == kind) {
            if let Some(span) = self.open.pop() {
                self.append(span.into_node());
            }
        } else if self.open.len() >= MAX_SPAN_NESTING {
            self.append(Node::Text(kind.delimiter()));
        } else {
            self.open.push(OpenSpan {
                kind,
                children: Vec::new(),
            });
        }
    }

    fn finish(mut self) -> Vec<Node<'a>> {
        while let Some(span) = self.open.pop() {
            self.append(span.into_node());
        }
        self.root
    }
}

/// Builds node trees from blocks and token sequences.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tokenizer: InlineTokenizer,
}

impl TreeBuilder {
    /// Create a new tree builder.
    pub fn new() -> Self {
        Self {
            tokenizer: InlineTokenizer::new(),
        }
    }

    /// Build the top-level nodes of a whole document.
    ///
    /// Blank-line blocks produce no node. Paragraphs without an alignment
    /// directive, and fenced regions, use `options.default_justify`.
    pub fn build_document<'a>(&mut self, blocks: Vec<Block<'a>>, options: &Options) -> Vec<Node<'a>> {
        let mut nodes = Vec::with_capacity(blocks.len());
        for block in blocks {
            match block {
                Block::Heading { level, content } => {
                    nodes.push(Node::Heading { level, content });
                }
                Block::List { items } => {
                    let items = items.into_iter().map(|item| self.build_text(item)).collect();
                    nodes.push(Node::List { items });
                }
                Block::Paragraph {
                    text,
                    tokens,
                    align,
                } => {
                    nodes.push(Node::Paragraph {
                        children: self.build_inline(text, &tokens),
                        justify: align.unwrap_or(options.default_justify),
                    });
                }
                Block::CodeFence { text, tokens } => {
                    nodes.push(Node::Paragraph {
                        children: self.build_inline(text, &tokens),
                        justify: options.default_justify,
                    });
                }
                Block::Newline => {}
            }
        }
        nodes
    }

    /// Tokenize `text` and build its inline nodes.
    pub fn build_text<'a>(&mut self, text: &'a str) -> Vec<Node<'a>> {
        let tokens = self.tokenizer.tokenize(text);
        self.build_inline(text, &tokens)
    }

    /// Build inline nodes from tokens that refer to `text`.
    pub fn build_inline<'a>(&mut self, text: &'a str, tokens: &[InlineToken]) -> Vec<Node<'a>> {
        let mut stack = SpanStack::default();

        for token in tokens {
            let node = match *token {
                InlineToken::Marker(kind) => {
                    stack.marker(kind);
                    continue;
                }
                InlineToken::Text(range) => Node::Text(range.slice(text)),
                InlineToken::InlineCode(range) => Node::InlineCode(range.slice(text)),
                InlineToken::BlockCode(range) => Node::BlockCode(range.slice(text)),
                InlineToken::Link { label, url } => Node::Hyperlink {
                    href: url.slice(text),
                    text: label.slice(text),
                },
                InlineToken::Image { width, alt, src } => Node::Image {
                    src: src.slice(text),
                    alt: alt.slice(text),
                    width: width.slice(text),
                },
                InlineToken::ColoredSpan { color, inner } => Node::ColoredText {
                    color: color.slice(text),
                    children: self.build_text(inner.slice(text)),
                },
            };
            stack.append(node);
        }

        stack.finish()
    }
}

/// Build the document tree for a sequence of blocks.
pub fn build_document<'a>(blocks: Vec<Block<'a>>, options: &Options) -> Vec<Node<'a>> {
    TreeBuilder::new().build_document(blocks, options)
}

/// Build inline nodes for tokens that refer to `text`.
///
/// # Example
/// ```
/// use huemark::inline::tokenize;
/// use huemark::tree::{build_inline, Node};
///
/// let text = "**bold";
/// let nodes = build_inline(text, &tokenize(text));
/// assert_eq!(nodes, vec![Node::Bold(vec![Node::Text("bold")])]);
/// ```
pub fn build_inline<'a>(text: &'a str, tokens: &[InlineToken]) -> Vec<Node<'a>> {
    TreeBuilder::new().build_inline(text, tokens)
}
