//! Block segmenter implementation.

use crate::cursor::Cursor;
use crate::inline::InlineTokenizer;
use crate::Range;

use super::directive;
use super::unit::Block;

/// Block segmenter state.
///
/// Splits the source into lines, collapses fenced regions into single units
/// and classifies every other line.
pub struct BlockSegmenter<'a> {
    /// Source text.
    source: &'a str,
    /// Start offset of the first line of an open fence, if inside one.
    fence_start: Option<u32>,
    /// Items of the list currently being accumulated.
    pending_list: Vec<&'a str>,
    /// Tokenizer for paragraph and fence text.
    tokenizer: InlineTokenizer,
}

impl<'a> BlockSegmenter<'a> {
    /// Create a new segmenter.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            fence_start: None,
            pending_list: Vec::new(),
            tokenizer: InlineTokenizer::new(),
        }
    }

    /// Segment the whole source, appending blocks in source order.
    pub fn segment(&mut self, blocks: &mut Vec<Block<'a>>) {
        for line in Cursor::new(self.source.as_bytes()).lines() {
            self.segment_line(line, blocks);
        }

        // A fence left open swallows the rest of the input as one unit.
        if let Some(start) = self.fence_start.take() {
            let unit = Range::new(start, self.source.len() as u32);
            self.push_fence(unit, blocks);
        }
        self.flush_list(blocks);
    }

    fn segment_line(&mut self, line: Range, blocks: &mut Vec<Block<'a>>) {
        let source = self.source;
        let text = line.slice(source);

        if directive::is_fence(text) {
            match self.fence_start.take() {
                Some(start) => self.push_fence(Range::new(start, line.end), blocks),
                None => self.fence_start = Some(line.start),
            }
            return;
        }
        if self.fence_start.is_some() {
            // Buffered implicitly: the unit is the contiguous source slice.
            return;
        }

        // The directive is stripped before classification but only a
        // paragraph keeps the captured alignment.
        let (align, text) = directive::strip_alignment(text);

        if let Some((level, content)) = directive::heading(text) {
            self.flush_list(blocks);
            blocks.push(Block::Heading { level, content });
        } else if let Some(item) = directive::list_item(text) {
            self.pending_list.push(item);
        } else if directive::is_blank(text) {
            self.flush_list(blocks);
            blocks.push(Block::Newline);
        } else {
            self.flush_list(blocks);
            let tokens = self.tokenizer.tokenize(text);
            blocks.push(Block::Paragraph {
                text,
                tokens,
                align,
            });
        }
    }

    fn push_fence(&mut self, unit: Range, blocks: &mut Vec<Block<'a>>) {
        self.flush_list(blocks);
        let text = unit.slice(self.source);
        log::trace!("fenced unit of {} bytes at offset {}", unit.len(), unit.start);
        let tokens = self.tokenizer.tokenize(text);
        blocks.push(Block::CodeFence { text, tokens });
    }

    fn flush_list(&mut self, blocks: &mut Vec<Block<'a>>) {
        if self.pending_list.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.pending_list);
        log::trace!("list of {} items", items.len());
        blocks.push(Block::List { items });
    }
}
