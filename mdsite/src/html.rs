use std::fmt;

/// HTML attributes in insertion order. Rendering order is significant,
/// so this is a list of pairs rather than a map.
pub type Attrs = Vec<(String, String)>;

/// A node in the rendered HTML tree.
///
/// Leaves carry their text content directly; parents carry an ordered
/// list of children. An untagged leaf serializes to its value verbatim,
/// with no escaping -- callers pre-escape if they need to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        /// Wrapping tag. `None` emits the bare value.
        tag: Option<String>,
        /// Text content. May be empty, e.g. for `img`.
        value: String,
        attrs: Attrs,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attrs,
    },
}

impl HtmlNode {
    /// A bare text leaf with no wrapping tag.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Attrs,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Serialize this node and everything under it to HTML text.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

fn write_attrs(f: &mut fmt::Formatter<'_>, attrs: &Attrs) -> fmt::Result {
    for (key, value) in attrs {
        write!(f, " {}=\"{}\"", key, value)?;
    }
    Ok(())
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf { tag: None, value, .. } => write!(f, "{}", value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                write!(f, "<{}", tag)?;
                write_attrs(f, attrs)?;
                write!(f, ">{}</{}>", value, tag)
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                write!(f, "<{}", tag)?;
                write_attrs(f, attrs)?;
                write!(f, ">")?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", tag)
            }
        }
    }
}
