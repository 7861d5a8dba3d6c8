//! Blockquote builder - groups quote lines into one nested tree.

use super::inline::InlinePipeline;
use crate::core::ast::{Quote, QuoteItem};

/// Deepest quote nesting. Markers past this depth are kept as text.
pub const MAX_QUOTE_DEPTH: usize = 32;

/// Strips leading `>` markers and returns `(depth, rest)`.
///
/// A `>` counts as a marker when followed by a space, another `>`, or the end
/// of the line, so `>text` is ordinary text.
pub fn parse_quote_line(line: &str) -> Option<(usize, &str)> {
    let mut depth = 0;
    let mut rest = line;

    while depth < MAX_QUOTE_DEPTH {
        let Some(after) = rest.strip_prefix('>') else {
            break;
        };
        if after.is_empty() || after.starts_with('>') {
            depth += 1;
            rest = after;
        } else if let Some(text) = after.strip_prefix(' ') {
            depth += 1;
            rest = text;
        } else {
            break;
        }
    }

    (depth > 0).then_some((depth, rest))
}

/// Builds a quote from consecutive `(depth, text)` lines.
///
/// Lines at the same depth share one `<blockquote>`; each run of deeper lines
/// becomes a single nested quote. Adjacent quote lines therefore never render
/// as sibling blockquotes.
pub fn build_quote(lines: &[(usize, &str)], pipeline: &InlinePipeline) -> Quote {
    build_level(lines, 1, pipeline)
}

fn build_level(lines: &[(usize, &str)], depth: usize, pipeline: &InlinePipeline) -> Quote {
    let mut items = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let (line_depth, text) = lines[i];
        if line_depth <= depth {
            items.push(QuoteItem::Line(pipeline.parse(text)));
            i += 1;
            continue;
        }
        let start = i;
        while i < lines.len() && lines[i].0 > depth {
            i += 1;
        }
        items.push(QuoteItem::Nested(build_level(
            &lines[start..i],
            depth + 1,
            pipeline,
        )));
    }

    Quote { items }
}
