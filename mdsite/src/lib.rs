pub mod block;
pub mod error;
pub mod html;
pub mod inline;
pub mod render;
pub mod span;

pub use block::{BlockType, block_to_block_type, split_blocks};
pub use error::ConvertError;
pub use html::HtmlNode;
pub use render::{extract_title, markdown_to_html_node};
pub use span::{SpanKind, TextSpan};
