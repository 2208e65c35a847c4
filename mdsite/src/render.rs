use std::sync::LazyLock;

use regex::Regex;

use crate::block::{self, BlockType, block_to_block_type, split_blocks};
use crate::error::ConvertError;
use crate::html::HtmlNode;
use crate::inline::text_to_spans;
use crate::span::{SpanKind, TextSpan};

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s").unwrap());

/// Convert a whole Markdown document into a single `div` node wrapping
/// one rendered child per block, in document order.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let mut children = Vec::new();
    for block in split_blocks(markdown) {
        children.push(render_block(block)?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// The document title: the stripped text of the first level-1 heading
/// block anywhere in the document.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    for block in split_blocks(markdown) {
        if TITLE_RE.is_match(block) {
            return Ok(strip_chars(block, 2).trim().to_string());
        }
    }
    Err(ConvertError::TitleNotFound)
}

fn render_block(block: &str) -> Result<HtmlNode, ConvertError> {
    match block_to_block_type(block) {
        BlockType::Code => {
            // Code content is verbatim: never inline-tokenized.
            let interior = strip_code_fences(block);
            let leaf = TextSpan::new(interior, SpanKind::Text).to_html_node()?;
            Ok(HtmlNode::parent("code", vec![leaf]))
        }
        BlockType::Heading(level) => {
            let content = block.trim_start_matches('#').trim_start();
            Ok(HtmlNode::parent(
                format!("h{}", level),
                spans_to_nodes(content)?,
            ))
        }
        BlockType::Quote => {
            let content = block
                .split('\n')
                .map(|line| strip_chars(line, 2))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(HtmlNode::parent("blockquote", spans_to_nodes(&content)?))
        }
        BlockType::UnorderedList => Ok(HtmlNode::parent("ul", list_items(block, false)?)),
        BlockType::OrderedList => Ok(HtmlNode::parent("ol", list_items(block, true)?)),
        BlockType::Paragraph => Ok(HtmlNode::parent("p", spans_to_nodes(block)?)),
    }
}

/// One `li` parent per line, marker stripped, content tokenized.
fn list_items(block: &str, ordered: bool) -> Result<Vec<HtmlNode>, ConvertError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let content = if ordered {
            let marker = block::ordered_marker_len(line).unwrap_or(0);
            &line[marker..]
        } else {
            strip_chars(line, 2)
        };
        items.push(HtmlNode::parent("li", spans_to_nodes(content)?));
    }
    Ok(items)
}

fn spans_to_nodes(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    text_to_spans(text)
        .iter()
        .map(TextSpan::to_html_node)
        .collect()
}

/// Skip the first `count` characters of `s`, or all of it.
fn strip_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((index, _)) => &s[index..],
        None => "",
    }
}

/// The text between the opening and closing triple backticks.
fn strip_code_fences(block: &str) -> &str {
    if block.len() >= 6 {
        &block[3..block.len() - 3]
    } else {
        ""
    }
}
