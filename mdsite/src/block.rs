use std::sync::LazyLock;

use regex::Regex;

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s").unwrap());

/// The structural type of one block, derived from its raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    /// Heading level 1-6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks on blank-line boundaries.
/// Each piece is trimmed; pieces that trim to nothing are dropped.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify one block by its structural markup.
///
/// Dispatches on the first character; any structural mismatch falls back
/// to Paragraph. Classification never fails.
pub fn block_to_block_type(block: &str) -> BlockType {
    let Some(first) = block.chars().next() else {
        return BlockType::Paragraph;
    };
    match first {
        '#' => {
            let hashes = block.chars().take_while(|&c| c == '#').count();
            if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
                return BlockType::Heading(hashes as u8);
            }
            BlockType::Paragraph
        }
        '`' => {
            if block.starts_with("```") && block.ends_with("```") {
                return BlockType::Code;
            }
            BlockType::Paragraph
        }
        '>' => {
            if block.split('\n').all(|line| line.starts_with('>')) {
                return BlockType::Quote;
            }
            BlockType::Paragraph
        }
        '-' => {
            if block.split('\n').all(|line| line.starts_with("- ")) {
                return BlockType::UnorderedList;
            }
            BlockType::Paragraph
        }
        '1' => {
            if is_ordered_list(block) {
                return BlockType::OrderedList;
            }
            BlockType::Paragraph
        }
        _ => BlockType::Paragraph,
    }
}

/// Every line must carry an `N. ` marker where N is exactly the line's
/// 1-based position in the block.
fn is_ordered_list(block: &str) -> bool {
    block.split('\n').enumerate().all(|(index, line)| {
        ORDERED_ITEM_RE
            .captures(line)
            .and_then(|captures| captures[1].parse::<usize>().ok())
            .is_some_and(|number| number == index + 1)
    })
}

/// Byte length of the `N. ` marker at the start of a line, if present.
pub(crate) fn ordered_marker_len(line: &str) -> Option<usize> {
    ORDERED_ITEM_RE.find(line).map(|found| found.end())
}
