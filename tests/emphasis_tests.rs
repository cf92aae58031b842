use huemark::compile;

fn inline_html(input: &str) -> String {
    let html = compile(input);
    html.strip_prefix("<p style=\"text-align:left;\">")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .unwrap_or_else(|| panic!("not a single paragraph: {html}"))
        .to_string()
}

#[test]
fn test_bold_italic_underline() {
    assert_eq!(inline_html("**b**"), "<strong>b</strong>");
    assert_eq!(inline_html("_i_"), "<em>i</em>");
    assert_eq!(inline_html("__u__"), "<u>u</u>");
}

#[test]
fn test_nested_different_kinds() {
    assert_eq!(
        inline_html("**bold _both_ bold**"),
        "<strong>bold <em>both</em> bold</strong>"
    );
    assert_eq!(
        inline_html("__u **b _i_**__"),
        "<u>u <strong>b <em>i</em></strong></u>"
    );
}

#[test]
fn test_unterminated_span_auto_closes() {
    assert_eq!(inline_html("**open"), "<strong>open</strong>");
    assert_eq!(
        inline_html("a _b **c"),
        "a <em>b <strong>c</strong></em>"
    );
}

#[test]
fn test_interleaved_markers_nest() {
    assert_eq!(
        inline_html("**a _b** c_"),
        "<strong>a <em>b<strong> c<em></em></strong></em></strong>"
    );
}

#[test]
fn test_single_asterisk_is_literal() {
    assert_eq!(inline_html("2 * 3 = 6"), "2 * 3 = 6");
    assert_eq!(inline_html("*x*"), "*x*");
}

#[test]
fn test_triple_underscore() {
    // `__` wins over `_`, leaving an italic marker after the underline one.
    assert_eq!(inline_html("___x_ __"), "<u><em>x</em> </u>");
    // The closing run sees italic on top, so it opens again.
    assert_eq!(inline_html("___x___"), "<u><em>x<u><em></em></u></em></u>");
}

#[test]
fn test_snake_case_words_become_italic() {
    assert_eq!(inline_html("snake_case_name"), "snake<em>case</em>name");
}

#[test]
fn test_trailing_marker_yields_empty_span() {
    assert_eq!(inline_html("end**"), "end<strong></strong>");
}

#[test]
fn test_code_is_not_emphasized() {
    assert_eq!(
        inline_html("`**x**`"),
        "<code style=\"background-color: lightgray; padding: 2px 5px; border-radius: 3px; font-family: monospace;\">**x**</code>"
    );
}

#[test]
fn test_link_label_is_not_emphasized() {
    assert_eq!(
        inline_html("**[_a_](u)**"),
        "<strong><a href=\"u\" target=\"_blank\">_a_</a></strong>"
    );
}

#[test]
fn test_deep_nesting_is_bounded() {
    let input = "_**".repeat(200);
    let html = inline_html(&input);
    assert_eq!(html.matches("<em>").count(), html.matches("</em>").count());
    assert_eq!(
        html.matches("<strong>").count(),
        html.matches("</strong>").count()
    );
    assert!(html.contains("_**"), "markers past the limit stay literal: {html}");
}
