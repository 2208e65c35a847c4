use std::sync::LazyLock;

use regex::Regex;

use crate::span::{SpanKind, TextSpan};

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[(.+?)\]\((\S+)\)").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]\((\S+)\)").unwrap());

/// Tokenize one inline run into typed spans.
///
/// Five passes over the span list. Each pass re-scans only spans the
/// previous passes left as plain text (the image and link passes also
/// look inside bold and italic spans) and leaves every already-typed
/// span untouched, so formatting never re-enters a resolved region.
pub fn text_to_spans(text: &str) -> Vec<TextSpan> {
    let initial = vec![TextSpan::new(text, SpanKind::Text)];
    let italics = split_spans_delimiter(initial, "_", SpanKind::Italic);
    let bolds = split_spans_delimiter(italics, "**", SpanKind::Bold);
    let codes = split_spans_delimiter(bolds, "`", SpanKind::Code);
    let images = split_spans_image(codes);
    split_spans_link(images)
}

/// Split every still-plain span on a literal delimiter. Pieces at odd
/// indices take `kind`, pieces at even indices stay plain, empty pieces
/// are dropped.
///
/// Delimiter counts are not validated: with an odd number of delimiter
/// occurrences the piece after the last one is still typed by index
/// parity alone.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Text {
            out.push(span);
            continue;
        }
        for (index, piece) in span.text.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            if index % 2 == 1 {
                out.push(TextSpan::new(piece, kind));
            } else {
                out.push(TextSpan::new(piece, SpanKind::Text));
            }
        }
    }
    out
}

/// Extract `![alt](url)` images out of plain, bold, and italic spans.
/// The text around each match keeps the kind of the span it came from.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, &IMAGE_RE, SpanKind::Image)
}

/// Extract `[label](url)` links. A match immediately preceded by `!` is
/// image syntax and is skipped.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, &LINK_RE, SpanKind::Link)
}

fn split_spans_pattern(spans: Vec<TextSpan>, pattern: &Regex, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if !matches!(
            span.kind,
            SpanKind::Text | SpanKind::Bold | SpanKind::Italic
        ) {
            out.push(span);
            continue;
        }
        let text = &span.text;
        let mut last = 0;
        for captures in pattern.captures_iter(text) {
            let whole = captures.get(0).unwrap();
            if kind == SpanKind::Link
                && whole.start() > 0
                && text.as_bytes()[whole.start() - 1] == b'!'
            {
                continue;
            }
            if whole.start() > last {
                out.push(TextSpan::new(&text[last..whole.start()], span.kind));
            }
            out.push(TextSpan::with_url(&captures[1], kind, &captures[2]));
            last = whole.end();
        }
        if last == 0 {
            // Nothing matched; the span passes through unchanged.
            out.push(span);
        } else if last < text.len() {
            out.push(TextSpan::new(&text[last..], span.kind));
        }
    }
    out
}
