//! HTML output.
//!
//! [`HtmlWriter`] holds the tag helpers; [`render`] walks a node tree and
//! writes every node through them, depth first and in order.
//!
//! Nothing is escaped. Text, URLs, colors and code are written exactly as
//! they appear in the source.

use crate::block::Justify;
use crate::tree::Node;
use crate::Options;

const INLINE_CODE_STYLE: &str =
    "background-color: lightgray; padding: 2px 5px; border-radius: 3px; font-family: monospace;";
const BLOCK_CODE_STYLE: &str =
    "background-color: lightgray; padding: 5px; border-radius: 3px; font-family: monospace;";

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use huemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.strong_start();
/// writer.write_text("<raw>");
/// writer.strong_end();
///
/// assert_eq!(writer.into_string(), "<strong><raw></strong>");
/// ```
#[derive(Debug)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Every paragraph gains a styled `<p>` wrapper, so output is usually
    /// well over the input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len * 2 + 64),
        }
    }

    /// Wrap an existing buffer, keeping its capacity.
    #[inline]
    pub fn from_buffer(mut out: String) -> Self {
        out.clear();
        Self { out }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write source text verbatim.
    #[inline]
    pub fn write_text(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Block elements ---

    /// Write paragraph start: `<p style="text-align:JUSTIFY;">`
    #[inline]
    pub fn paragraph_start(&mut self, justify: Justify<'_>) {
        self.write_str("<p style=\"text-align:");
        self.write_text(justify.as_str());
        self.write_str(";\">");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write a whole heading: `<hN>content</hN>`
    #[inline]
    pub fn heading(&mut self, level: u8, content: &str) {
        debug_assert!((1..=6).contains(&level));
        let digit = char::from(b'0' + level);
        self.write_str("<h");
        self.out.push(digit);
        self.out.push('>');
        self.write_text(content);
        self.write_str("</h");
        self.out.push(digit);
        self.out.push('>');
    }

    /// Write list start: `<ul>`
    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul>");
    }

    /// Write list end: `</ul>`
    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("<li>");
    }

    /// Write list item end: `</li>`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }

    // --- Inline elements ---

    #[inline]
    pub fn strong_start(&mut self) {
        self.write_str("<strong>");
    }

    #[inline]
    pub fn strong_end(&mut self) {
        self.write_str("</strong>");
    }

    #[inline]
    pub fn em_start(&mut self) {
        self.write_str("<em>");
    }

    #[inline]
    pub fn em_end(&mut self) {
        self.write_str("</em>");
    }

    #[inline]
    pub fn u_start(&mut self) {
        self.write_str("<u>");
    }

    #[inline]
    pub fn u_end(&mut self) {
        self.write_str("</u>");
    }

    /// Write colored span start: `<a style="color:COLOR;">`
    ///
    /// The color is carried by an anchor element, not a `<span>`.
    #[inline]
    pub fn color_start(&mut self, color: &str) {
        self.write_str("<a style=\"color:");
        self.write_text(color);
        self.write_str(";\">");
    }

    /// Write colored span end: `</a>`
    #[inline]
    pub fn color_end(&mut self) {
        self.write_str("</a>");
    }

    /// Write a hyperlink opening in a new tab.
    #[inline]
    pub fn hyperlink(&mut self, href: &str, text: &str) {
        self.write_str("<a href=\"");
        self.write_text(href);
        self.write_str("\" target=\"_blank\">");
        self.write_text(text);
        self.write_str("</a>");
    }

    /// Write an image tag.
    #[inline]
    pub fn image(&mut self, src: &str, alt: &str, width: &str) {
        self.write_str("<img src=\"");
        self.write_text(src);
        self.write_str("\" alt=\"");
        self.write_text(alt);
        self.write_str("\" width=\"");
        self.write_text(width);
        self.write_str("\"/>");
    }

    /// Write the caption that follows an image.
    ///
    /// The caption text is the alt text with its first character
    /// upper-cased; the element id keeps the alt text as written.
    pub fn image_caption(&mut self, alt: &str) {
        self.write_str("<br><span id=\"img-");
        self.write_text(alt);
        self.write_str("-caption\"><small><b>Caption</b>: ");
        let mut chars = alt.chars();
        if let Some(first) = chars.next() {
            self.out.extend(first.to_uppercase());
            self.write_text(chars.as_str());
        }
        self.write_str("</small></span>");
    }

    /// Write inline code: `<code style="...">content</code>`
    #[inline]
    pub fn inline_code(&mut self, content: &str) {
        self.write_str("<code style=\"");
        self.write_str(INLINE_CODE_STYLE);
        self.write_str("\">");
        self.write_text(content);
        self.write_str("</code>");
    }

    /// Write block code: `<pre style="...">content</pre>`
    #[inline]
    pub fn block_code(&mut self, content: &str) {
        self.write_str("<pre style=\"");
        self.write_str(BLOCK_CODE_STYLE);
        self.write_str("\">");
        self.write_text(content);
        self.write_str("</pre>");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a sequence of nodes.
pub fn render(nodes: &[Node<'_>], writer: &mut HtmlWriter, options: &Options) {
    for node in nodes {
        render_node(node, writer, options);
    }
}

fn render_node(node: &Node<'_>, writer: &mut HtmlWriter, options: &Options) {
    match node {
        Node::Text(text) => writer.write_text(text),
        Node::Bold(children) => {
            writer.strong_start();
            render(children, writer, options);
            writer.strong_end();
        }
        Node::Italic(children) => {
            writer.em_start();
            render(children, writer, options);
            writer.em_end();
        }
        Node::Underlined(children) => {
            writer.u_start();
            render(children, writer, options);
            writer.u_end();
        }
        Node::ColoredText { color, children } => {
            writer.color_start(color);
            render(children, writer, options);
            writer.color_end();
        }
        Node::InlineCode(code) => writer.inline_code(code),
        Node::BlockCode(code) => writer.block_code(code),
        Node::Hyperlink { href, text } => writer.hyperlink(href, text),
        Node::Image { src, alt, width } => {
            writer.image(src, alt, width);
            if options.image_captions {
                writer.image_caption(alt);
            }
        }
        Node::Heading { level, content } => writer.heading(*level, content),
        Node::Paragraph { children, justify } => {
            writer.paragraph_start(*justify);
            render(children, writer, options);
            writer.paragraph_end();
        }
        Node::List { items } => {
            writer.ul_start();
            for item in items {
                writer.li_start();
                render(item, writer, options);
                writer.li_end();
            }
            writer.ul_end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_one(node: Node<'_>) -> String {
        let mut writer = HtmlWriter::new();
        render(&[node], &mut writer, &Options::default());
        writer.into_string()
    }

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert!(writer.is_empty());
        assert_eq!(writer.len(), 0);
    }

    #[test]
    fn test_writer_from_buffer_clears() {
        let writer = HtmlWriter::from_buffer(String::from("stale"));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_writer_text_is_not_escaped() {
        let mut writer = HtmlWriter::new();
        writer.write_text("<script>&\"'");
        assert_eq!(writer.as_str(), "<script>&\"'");
    }

    #[test]
    fn test_writer_clear_reuse() {
        let mut writer = HtmlWriter::new();
        writer.write_str("first");
        writer.clear();
        assert!(writer.is_empty());
        writer.write_str("second");
        assert_eq!(writer.as_str(), "second");
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=6u8 {
            let mut writer = HtmlWriter::new();
            writer.heading(level, "T");
            assert_eq!(writer.as_str(), format!("<h{level}>T</h{level}>"));
        }
    }

    #[test]
    fn test_paragraph_alignment() {
        let html = render_one(Node::Paragraph {
            children: vec![Node::Text("x")],
            justify: Justify::Other("end"),
        });
        assert_eq!(html, "<p style=\"text-align:end;\">x</p>");
    }

    #[test]
    fn test_spans() {
        let html = render_one(Node::Bold(vec![
            Node::Italic(vec![Node::Text("a")]),
            Node::Underlined(vec![Node::Text("b")]),
        ]));
        assert_eq!(html, "<strong><em>a</em><u>b</u></strong>");
    }

    #[test]
    fn test_colored_text() {
        let html = render_one(Node::ColoredText {
            color: "rgb(1,2,3)",
            children: vec![Node::Text("c")],
        });
        assert_eq!(html, "<a style=\"color:rgb(1,2,3);\">c</a>");
    }

    #[test]
    fn test_hyperlink() {
        let html = render_one(Node::Hyperlink {
            href: "https://a.b/?x=1&y=2",
            text: "ab",
        });
        assert_eq!(html, "<a href=\"https://a.b/?x=1&y=2\" target=\"_blank\">ab</a>");
    }

    #[test]
    fn test_image_with_caption() {
        let html = render_one(Node::Image {
            src: "cat.png",
            alt: "cat",
            width: "300",
        });
        assert_eq!(
            html,
            "<img src=\"cat.png\" alt=\"cat\" width=\"300\"/><br><span id=\"img-cat-caption\">\
             <small><b>Caption</b>: Cat</small></span>"
        );
    }

    #[test]
    fn test_image_caption_multibyte_and_empty() {
        let mut writer = HtmlWriter::new();
        writer.image_caption("éclair");
        assert!(writer.as_str().ends_with(": Éclair</small></span>"));

        let mut writer = HtmlWriter::new();
        writer.image_caption("");
        assert_eq!(
            writer.as_str(),
            "<br><span id=\"img--caption\"><small><b>Caption</b>: </small></span>"
        );
    }

    #[test]
    fn test_image_without_caption_option() {
        let options = Options {
            image_captions: false,
            ..Options::default()
        };
        let mut writer = HtmlWriter::new();
        let node = Node::Image {
            src: "s",
            alt: "a",
            width: "1",
        };
        render(std::slice::from_ref(&node), &mut writer, &options);
        assert_eq!(writer.as_str(), "<img src=\"s\" alt=\"a\" width=\"1\"/>");
    }

    #[test]
    fn test_code_styles() {
        assert_eq!(
            render_one(Node::InlineCode("x")),
            format!("<code style=\"{INLINE_CODE_STYLE}\">x</code>")
        );
        assert_eq!(
            render_one(Node::BlockCode("\na\nb\n")),
            format!("<pre style=\"{BLOCK_CODE_STYLE}\">\na\nb\n</pre>")
        );
    }

    #[test]
    fn test_list() {
        let html = render_one(Node::List {
            items: vec![vec![Node::Text("a")], vec![Node::Bold(vec![Node::Text("b")])]],
        });
        assert_eq!(html, "<ul><li>a</li><li><strong>b</strong></li></ul>");
    }
}
