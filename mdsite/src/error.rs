use std::fmt;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

use crate::span::SpanKind;

/// Failures raised while converting one Markdown document.
///
/// Any of these aborts the conversion of the current document; whether a
/// batch continues past it is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A link or image span reached node conversion without a URL.
    MissingUrl(SpanKind),
    /// The document has no level-1 heading to take a title from.
    TitleNotFound,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingUrl(SpanKind::Image) => write!(f, "image span has no url"),
            ConvertError::MissingUrl(_) => write!(f, "link span has no url"),
            ConvertError::TitleNotFound => write!(f, "no h1 heading found"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl ConvertError {
    /// Convert to a codespan-reporting Diagnostic for display.
    /// These errors are document-level, so the label points at the start
    /// of the file rather than at a span.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let diagnostic = Diagnostic::new(Severity::Error)
            .with_message(self.to_string())
            .with_labels(vec![Label::primary(file_id, 0..0)]);
        match self {
            ConvertError::TitleNotFound => diagnostic
                .with_notes(vec!["every page needs a `# Title` heading".to_string()]),
            _ => diagnostic,
        }
    }
}
