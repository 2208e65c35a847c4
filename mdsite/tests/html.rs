use mdsite::HtmlNode;

#[test]
fn leaf_with_attrs() {
    let node = HtmlNode::leaf_with_attrs(
        "a",
        "Click here",
        vec![("href".to_string(), "https://www.google.com".to_string())],
    );
    assert_eq!(
        node.to_html(),
        "<a href=\"https://www.google.com\">Click here</a>"
    );
}

#[test]
fn attrs_render_in_insertion_order() {
    let node = HtmlNode::leaf_with_attrs(
        "a",
        "Test",
        vec![
            ("href".to_string(), "https://www.google.com".to_string()),
            ("target".to_string(), "_blank".to_string()),
        ],
    );
    assert_eq!(
        node.to_html(),
        "<a href=\"https://www.google.com\" target=\"_blank\">Test</a>"
    );
}

#[test]
fn untagged_leaf_is_verbatim() {
    assert_eq!(HtmlNode::text("Hello, world!").to_html(), "Hello, world!");
}

#[test]
fn tagged_leaf() {
    assert_eq!(
        HtmlNode::leaf("p", "Hello, world!").to_html(),
        "<p>Hello, world!</p>"
    );
}

#[test]
fn parent_with_child() {
    let parent = HtmlNode::parent("div", vec![HtmlNode::leaf("span", "child")]);
    assert_eq!(parent.to_html(), "<div><span>child</span></div>");
}

#[test]
fn parent_with_grandchild() {
    let parent = HtmlNode::parent(
        "div",
        vec![HtmlNode::parent(
            "span",
            vec![HtmlNode::leaf("b", "grandchild")],
        )],
    );
    assert_eq!(parent.to_html(), "<div><span><b>grandchild</b></span></div>");
}

#[test]
fn parent_with_many_children() {
    let parent = HtmlNode::parent(
        "p",
        vec![
            HtmlNode::leaf("b", "Bold text"),
            HtmlNode::text("Normal text"),
            HtmlNode::leaf("i", "italic text"),
            HtmlNode::text("Normal text"),
        ],
    );
    assert_eq!(
        parent.to_html(),
        "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
    );
}

#[test]
fn parent_with_no_children() {
    assert_eq!(HtmlNode::parent("div", Vec::new()).to_html(), "<div></div>");
}

#[test]
fn structural_equality_is_recursive() {
    let attrs = vec![("href".to_string(), "https://www.google.com".to_string())];
    let first = HtmlNode::parent(
        "h1",
        vec![HtmlNode::leaf_with_attrs("a", "Test", attrs.clone())],
    );
    let second = HtmlNode::parent(
        "h1",
        vec![HtmlNode::leaf_with_attrs("a", "Test", attrs)],
    );
    assert_eq!(first, second);

    let different = HtmlNode::parent("h1", vec![HtmlNode::leaf("a", "Test")]);
    assert_ne!(first, different);
}
