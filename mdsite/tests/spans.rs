use mdsite::{ConvertError, HtmlNode, SpanKind, TextSpan};

#[test]
fn equality_compares_text_kind_and_url() {
    let first = TextSpan::new("This is a text node", SpanKind::Bold);
    let second = TextSpan::new("This is a text node", SpanKind::Bold);
    assert_eq!(first, second);

    let with_url = TextSpan::with_url("This is a text node", SpanKind::Bold, "http://test.test");
    let same_url = TextSpan::with_url("This is a text node", SpanKind::Bold, "http://test.test");
    assert_eq!(with_url, same_url);
    assert_ne!(first, with_url);

    let italic = TextSpan::new("This is a text node", SpanKind::Italic);
    assert_ne!(first, italic);
}

#[test]
fn plain_span_converts_to_untagged_leaf() {
    let span = TextSpan::new("This is a text node", SpanKind::Text);
    assert_eq!(
        span.to_html_node().unwrap(),
        HtmlNode::text("This is a text node")
    );
}

#[test]
fn bold_italic_code_get_their_tags() {
    let bold = TextSpan::new("x", SpanKind::Bold).to_html_node().unwrap();
    assert_eq!(bold, HtmlNode::leaf("b", "x"));
    let italic = TextSpan::new("x", SpanKind::Italic).to_html_node().unwrap();
    assert_eq!(italic, HtmlNode::leaf("i", "x"));
    let code = TextSpan::new("x", SpanKind::Code).to_html_node().unwrap();
    assert_eq!(code, HtmlNode::leaf("code", "x"));
}

#[test]
fn link_span_converts_to_anchor() {
    let span = TextSpan::with_url("Click here", SpanKind::Link, "https://www.google.com");
    let expected = HtmlNode::leaf_with_attrs(
        "a",
        "Click here",
        vec![("href".to_string(), "https://www.google.com".to_string())],
    );
    assert_eq!(span.to_html_node().unwrap(), expected);
}

#[test]
fn image_span_converts_to_img_with_empty_value() {
    let span = TextSpan::with_url("alt text", SpanKind::Image, "https://img.test/a.png");
    let expected = HtmlNode::leaf_with_attrs(
        "img",
        "",
        vec![
            ("src".to_string(), "https://img.test/a.png".to_string()),
            ("alt".to_string(), "alt text".to_string()),
        ],
    );
    assert_eq!(span.to_html_node().unwrap(), expected);
}

#[test]
fn link_and_image_without_url_fail() {
    let link = TextSpan::new("orphan", SpanKind::Link);
    assert_eq!(
        link.to_html_node(),
        Err(ConvertError::MissingUrl(SpanKind::Link))
    );
    let image = TextSpan::new("orphan", SpanKind::Image);
    assert_eq!(
        image.to_html_node(),
        Err(ConvertError::MissingUrl(SpanKind::Image))
    );
}
