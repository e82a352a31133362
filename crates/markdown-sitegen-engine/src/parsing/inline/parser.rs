use std::ops::Range;

use crate::error::{MarkupError, Result};

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::Span,
};

/// Tokenizes a block's text into an ordered sequence of [`Span`]s.
///
/// Passes run in a fixed order: bold, italic, code, images, links. Each pass
/// only looks at the `Text` spans left by the previous one, so images are
/// taken before the link pass could claim their `[alt](src)` tail.
///
/// # Errors
/// [`MarkupError::UnbalancedDelimiter`] if any emphasis or code delimiter
/// is left unclosed.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::text(text)];
    let spans = split_delimiter(spans, Bold::DELIMITER, Span::Bold)?;
    let spans = split_delimiter(spans, Italic::DELIMITER, Span::Italic)?;
    let spans = split_delimiter(spans, CodeSpan::DELIMITER, Span::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Splits every `Text` span on paired `delimiter` occurrences.
///
/// Text between a pair is wrapped by `wrap`; text outside stays `Text`.
/// Empty fragments are dropped. Spans without the delimiter, and all
/// non-text spans, pass through untouched.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    wrap: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() || !span.content().contains(delimiter) {
            out.push(span);
            continue;
        }

        let sections: Vec<&str> = span.content().split(delimiter).collect();
        // n delimiters give n + 1 sections; an odd delimiter count leaves one open
        if sections.len() % 2 == 0 {
            return Err(MarkupError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.content().to_string(),
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            let section = section.to_string();
            out.push(if i % 2 == 0 { Span::Text(section) } else { wrap(section) });
        }
    }

    Ok(out)
}

/// Replaces `![alt](src)` occurrences in `Text` spans with `Image` spans.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, Image::OPEN, |alt, src| Span::image(alt, src))
}

/// Replaces `[label](target)` occurrences in `Text` spans with `Link` spans.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, Link::OPEN, |text, url| Span::link(text, url))
}

/// Returns `(alt, src)` for every image in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    scan_references(text, Image::OPEN)
        .into_iter()
        .map(|r| (r.label, r.target))
        .collect()
}

/// Returns `(label, target)` for every link in `text`, in order.
///
/// Images also match this shape; run [`extract_images`] first when both
/// need telling apart.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    scan_references(text, Link::OPEN)
        .into_iter()
        .map(|r| (r.label, r.target))
        .collect()
}

/// A bracketed reference found in text, with byte ranges into the source.
struct Reference<'a> {
    full: Range<usize>,
    label: &'a str,
    target: &'a str,
}

fn split_references(
    spans: Vec<Span>,
    open: &[u8],
    build: fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    // Helper to flush text between references, skipping empty fragments
    fn flush_text(out: &mut Vec<Span>, text: &str) {
        if !text.is_empty() {
            out.push(Span::text(text));
        }
    }

    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let text = span.content();
        let refs = scan_references(text, open);
        if refs.is_empty() {
            out.push(span);
            continue;
        }

        let mut text_start = 0;
        for r in refs {
            flush_text(&mut out, &text[text_start..r.full.start]);
            out.push(build(r.label, r.target));
            text_start = r.full.end;
        }
        flush_text(&mut out, &text[text_start..]);
    }

    out
}

/// Finds non-overlapping references left to right.
fn scan_references<'a>(text: &'a str, open: &[u8]) -> Vec<Reference<'a>> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(r) = try_parse_reference(&mut cur, open) {
            out.push(r);
            continue;
        }
        cur.bump();
    }

    out
}

/// Attempts to parse `OPEN label](target)` at the current position.
///
/// The label runs to the first `]`, which must be followed by `(`; the
/// target runs to the first `)`. On failure, cursor position is restored.
fn try_parse_reference<'a>(cur: &mut Cursor<'a>, open: &[u8]) -> Option<Reference<'a>> {
    if !cur.starts_with(open) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open.len());

    let label_start = cur.pos();
    cur.skip_until(Link::LABEL_CLOSE);
    let label_end = cur.pos();

    if !cur.starts_with(Link::TARGET_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::TARGET_OPEN.len());

    let target_start = cur.pos();
    cur.skip_until(Link::TARGET_CLOSE);
    let target_end = cur.pos();

    if cur.peek() != Some(Link::TARGET_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(Reference {
        full: start..cur.pos(),
        label: cur.slice(label_start, label_end),
        target: cur.slice(target_start, target_end),
    })
}
