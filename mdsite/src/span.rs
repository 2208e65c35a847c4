use crate::error::ConvertError;
use crate::html::HtmlNode;

/// The closed set of inline span types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed contiguous run of inline text.
/// `url` is meaningful only for Link and Image spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        TextSpan {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        TextSpan {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    /// Map this span to a single HTML leaf node.
    ///
    /// Fails only for a Link or Image span missing its URL; every other
    /// kind converts unconditionally.
    pub fn to_html_node(&self) -> Result<HtmlNode, ConvertError> {
        match self.kind {
            SpanKind::Text => Ok(HtmlNode::text(self.text.as_str())),
            SpanKind::Bold => Ok(HtmlNode::leaf("b", self.text.as_str())),
            SpanKind::Italic => Ok(HtmlNode::leaf("i", self.text.as_str())),
            SpanKind::Code => Ok(HtmlNode::leaf("code", self.text.as_str())),
            SpanKind::Link => {
                let url = self
                    .url
                    .as_deref()
                    .ok_or(ConvertError::MissingUrl(SpanKind::Link))?;
                Ok(HtmlNode::leaf_with_attrs(
                    "a",
                    self.text.as_str(),
                    vec![("href".to_string(), url.to_string())],
                ))
            }
            SpanKind::Image => {
                let url = self
                    .url
                    .as_deref()
                    .ok_or(ConvertError::MissingUrl(SpanKind::Image))?;
                Ok(HtmlNode::leaf_with_attrs(
                    "img",
                    "",
                    vec![
                        ("src".to_string(), url.to_string()),
                        ("alt".to_string(), self.text.clone()),
                    ],
                ))
            }
        }
    }
}
