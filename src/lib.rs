//! huemark: compiler for a small line-oriented markup dialect
//!
//! Turns the text of an editing surface into HTML for a live preview. The
//! dialect has headings, `- ` lists, `**bold**`, `_italic_`, `__underline__`,
//! code spans, `[fg:COLOR]colored[/fg]` spans, `[label](url)` links,
//! `[img-WIDTH:ALT](src)` images and `[[!align:WORD]]` paragraph alignment.
//!
//! # Pipeline
//! 1. [`block`]: split the source into headings, lists, paragraphs, blank
//!    lines and fenced regions
//! 2. [`inline`]: tokenize paragraph text into a flat token stream
//! 3. [`tree`]: pair emphasis markers into nested spans with a stack
//! 4. [`render`]: write the tree as HTML
//!
//! Every stage is a pure function of its input. Compiling never fails and
//! the same source always produces the same bytes.
//!
//! # Warning
//! Output is **not** escaped. Raw `<`, `>`, `&` and quotes in the source, as
//! well as URLs and colors, are copied into the HTML as-is. Never place the
//! output of untrusted input into a trusted HTML context.

pub mod block;
pub mod cursor;
pub mod inline;
pub mod limits;
pub mod range;
pub mod render;
pub mod tree;

// Re-export primary types
pub use block::{segment, Block, BlockSegmenter, Justify};
pub use inline::{tokenize, InlineToken, InlineTokenizer, SpanKind};
pub use range::Range;
pub use render::{render, HtmlWriter};
pub use tree::{build_document, build_inline, Node, TreeBuilder};

/// Compilation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Alignment of paragraphs that carry no `[[!align:...]]` directive,
    /// and of fenced regions.
    pub default_justify: Justify<'static>,
    /// Write a generated caption after every image.
    pub image_captions: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_justify: Justify::Left,
            image_captions: true,
        }
    }
}

/// Compile markup to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = huemark::compile("# Hello\n**World**");
/// assert_eq!(
///     html,
///     "<h1>Hello</h1><p style=\"text-align:left;\"><strong>World</strong></p>"
/// );
/// ```
pub fn compile(source: &str) -> String {
    compile_with_options(source, &Options::default())
}

/// Compile markup to HTML with options.
pub fn compile_with_options(source: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(source.len());
    render_to_writer(source, &mut writer, options);
    writer.into_string()
}

/// Compile markup to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused, which helps a host
/// that recompiles the whole document on every keystroke.
pub fn compile_into(source: &str, out: &mut String) {
    compile_into_with_options(source, out, &Options::default());
}

/// Compile markup to HTML into a provided buffer with options.
pub fn compile_into_with_options(source: &str, out: &mut String, options: &Options) {
    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render_to_writer(source, &mut writer, options);
    *out = writer.into_string();
}

/// Run the whole pipeline into an HtmlWriter.
fn render_to_writer(source: &str, writer: &mut HtmlWriter, options: &Options) {
    let blocks = segment(source);
    let block_count = blocks.len();
    let nodes = build_document(blocks, options);
    render(&nodes, writer, options);
    log::debug!(
        "compiled {} bytes: {} blocks, {} nodes, {} bytes of html",
        source.len(),
        block_count,
        nodes.len(),
        writer.len()
    );
}
