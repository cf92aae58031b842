//! Block segmenter.
//!
//! The segmenter is line-oriented and produces, in source order:
//! - Headings (content kept raw)
//! - Lists of consecutive `- item` lines
//! - Fenced regions collapsed into one unit
//! - Blank-line markers
//! - Paragraphs, one per remaining line, tokenized immediately

mod directive;
mod segmenter;
mod unit;

pub use segmenter::BlockSegmenter;
pub use unit::{Block, Justify};

/// Segment a whole source text into blocks.
///
/// # Example
/// ```
/// use huemark::block::{segment, Block};
///
/// let blocks = segment("# Title\n- a\n- b");
/// assert_eq!(blocks[0], Block::Heading { level: 1, content: "Title" });
/// assert_eq!(blocks[1], Block::List { items: vec!["a", "b"] });
/// ```
pub fn segment(source: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::with_capacity((source.len() / 32).max(4));
    BlockSegmenter::new(source).segment(&mut blocks);
    blocks
}
