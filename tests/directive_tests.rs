use huemark::{compile, compile_with_options, Justify, Options};

const CAPTION_OPEN: &str = "<br><span id=\"img-";

#[test]
fn test_alignment_keywords() {
    for word in ["left", "center", "right", "justify"] {
        assert_eq!(
            compile(&format!("[[!align:{word}]]x")),
            format!("<p style=\"text-align:{word};\">x</p>")
        );
    }
}

#[test]
fn test_unknown_alignment_word_written_verbatim() {
    assert_eq!(
        compile("[[!align:start]]x"),
        "<p style=\"text-align:start;\">x</p>"
    );
}

#[test]
fn test_alignment_applies_to_one_line_only() {
    assert_eq!(
        compile("[[!align:right]]a\nb"),
        "<p style=\"text-align:right;\">a</p><p style=\"text-align:left;\">b</p>"
    );
}

#[test]
fn test_alignment_discarded_on_heading_and_list() {
    assert_eq!(compile("[[!align:center]]## H"), "<h2>H</h2>");
    assert_eq!(compile("[[!align:center]]- i"), "<ul><li>i</li></ul>");
}

#[test]
fn test_alignment_not_at_line_start_is_text() {
    assert_eq!(
        compile("x [[!align:center]]"),
        "<p style=\"text-align:left;\">x [[!align:center]]</p>"
    );
}

#[test]
fn test_default_justify_option() {
    let options = Options {
        default_justify: Justify::Center,
        ..Options::default()
    };
    assert_eq!(
        compile_with_options("x", &options),
        "<p style=\"text-align:center;\">x</p>"
    );
}

#[test]
fn test_colored_span_forms() {
    for color in ["red", "#ff0000", "rgb(255,0,0)", "rgba(0, 0, 0, 0.5)"] {
        let html = compile(&format!("[fg:{color}]hot[/fg]"));
        assert!(
            html.contains(&format!("<a style=\"color:{color};\">hot</a>")),
            "color {color}: {html}"
        );
    }
}

#[test]
fn test_colored_span_inner_is_parsed() {
    assert_eq!(
        compile("[fg:blue]**b** [l](u)[/fg]"),
        "<p style=\"text-align:left;\"><a style=\"color:blue;\"><strong>b</strong> \
         <a href=\"u\" target=\"_blank\">l</a></a></p>"
    );
}

#[test]
fn test_colored_span_closes_at_first_end_tag() {
    assert_eq!(
        compile("[fg:red]a [fg:blue]b[/fg] c[/fg]"),
        "<p style=\"text-align:left;\"><a style=\"color:red;\">a [fg:blue]b</a> c[/fg]</p>"
    );
}

#[test]
fn test_bad_color_is_text() {
    assert_eq!(
        compile("[fg:]x[/fg]"),
        "<p style=\"text-align:left;\">[fg:]x[/fg]</p>"
    );
    assert_eq!(
        compile("[fg:red green]x[/fg]"),
        "<p style=\"text-align:left;\">[fg:red green]x[/fg]</p>"
    );
}

#[test]
fn test_link() {
    assert_eq!(
        compile("[home](https://example.com/?a=1&b=2)"),
        "<p style=\"text-align:left;\">\
         <a href=\"https://example.com/?a=1&b=2\" target=\"_blank\">home</a></p>"
    );
}

#[test]
fn test_link_needs_label_and_url() {
    assert_eq!(compile("[](u)"), "<p style=\"text-align:left;\">[](u)</p>");
    assert_eq!(compile("[l]()"), "<p style=\"text-align:left;\">[l]()</p>");
    assert_eq!(compile("[l] (u)"), "<p style=\"text-align:left;\">[l] (u)</p>");
}

#[test]
fn test_image_with_caption() {
    assert_eq!(
        compile("[img-300:owl](owl.png)"),
        "<p style=\"text-align:left;\"><img src=\"owl.png\" alt=\"owl\" width=\"300\"/>\
         <br><span id=\"img-owl-caption\"><small><b>Caption</b>: Owl</small></span></p>"
    );
}

#[test]
fn test_image_without_alt_has_empty_caption() {
    let html = compile("[img-10](a.png)");
    assert!(html.contains("<img src=\"a.png\" alt=\"\" width=\"10\"/>"), "{html}");
    assert!(html.contains("<b>Caption</b>: </small>"), "{html}");
}

#[test]
fn test_image_captions_can_be_disabled() {
    let options = Options {
        image_captions: false,
        ..Options::default()
    };
    let html = compile_with_options("[img-1:a](b)", &options);
    assert!(!html.contains(CAPTION_OPEN), "{html}");
}

#[test]
fn test_inline_and_block_code() {
    let html = compile("`a` ```b```");
    assert!(html.contains("<code style=\"background-color: lightgray; padding: 2px 5px; border-radius: 3px; font-family: monospace;\">a</code>"));
    assert!(html.contains("<pre style=\"background-color: lightgray; padding: 5px; border-radius: 3px; font-family: monospace;\">b</pre>"));
}

#[test]
fn test_no_escaping() {
    assert_eq!(
        compile("a < b & \"c\""),
        "<p style=\"text-align:left;\">a < b & \"c\"</p>"
    );
}
