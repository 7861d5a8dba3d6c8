//! Block parser - splits a post into block nodes, line by line.

use super::inline::InlinePipeline;
use super::list::{parse_list_line, ListBuilder};
use super::quote::{build_quote, parse_quote_line};
use super::slug::heading_slug;
use crate::core::ast::{Block, Document, Inline};
use regex::Regex;
use std::sync::LazyLock;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(`{3,})[ \t]*([A-Za-z0-9_+#.-]*)[ \t]*$").expect("fence pattern must compile")
});

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6}) +(.+?)[ \t]*$").expect("heading pattern must compile")
});

static SETEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:-{3,}|={3,})[ \t]*$").expect("setext pattern must compile")
});

/// Parses raw post text into a [`Document`].
///
/// Block constructs are tried in a fixed order for every line: fenced code,
/// heading, setext heading, horizontal rule, list, quote-source footer,
/// blockquote. Lines that match none of them are paragraph text.
pub struct BlockParser<'a> {
    pipeline: &'a InlinePipeline,
    slug_max_words: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(pipeline: &'a InlinePipeline, slug_max_words: usize) -> Self {
        Self {
            pipeline,
            slug_max_words,
        }
    }

    pub fn parse(&self, raw: &str) -> Document {
        if raw.is_empty() {
            return Document::default();
        }

        let normalized = raw.replace("\r\n", "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();
        let mut blocks = Vec::new();
        let mut paragraph: Vec<Vec<Inline>> = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if let Some((lang, fence_len)) = fence_open(line) {
                if let Some(close) = find_fence_close(&lines, i + 1, fence_len) {
                    flush(&mut blocks, &mut paragraph);
                    blocks.push(Block::Code {
                        lang: lang.to_string(),
                        lines: lines[i + 1..close].iter().map(|l| l.to_string()).collect(),
                    });
                    i = close + 1;
                    continue;
                }
            }

            if let Some(caps) = HEADING_RE.captures(line) {
                let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
                let content = self.pipeline.parse(caps.get(2).map_or("", |m| m.as_str()));
                let slug = heading_slug(&content, self.slug_max_words);
                flush(&mut blocks, &mut paragraph);
                blocks.push(Block::Heading {
                    level,
                    id: (!slug.is_empty()).then_some(slug),
                    content,
                });
                i += 1;
                continue;
            }

            if is_plain(line) && lines.get(i + 1).is_some_and(|next| SETEXT_RE.is_match(next)) {
                flush(&mut blocks, &mut paragraph);
                blocks.push(Block::Heading {
                    level: 1,
                    id: None,
                    content: self.pipeline.parse(line.trim()),
                });
                i += 2;
                continue;
            }

            if is_rule(line) {
                flush(&mut blocks, &mut paragraph);
                blocks.push(Block::Rule);
                i += 1;
                continue;
            }

            if parse_list_line(line).is_some() {
                flush(&mut blocks, &mut paragraph);
                let mut builder = ListBuilder::new(self.pipeline);
                while let Some(item) = lines.get(i).and_then(|l| parse_list_line(l)) {
                    builder.push(&item);
                    i += 1;
                }
                if let Some(list) = builder.finish() {
                    blocks.push(Block::List(list));
                }
                continue;
            }

            if let Some(text) = footer_text(line) {
                flush(&mut blocks, &mut paragraph);
                blocks.push(Block::Footer(self.pipeline.parse(text)));
                i += 1;
                continue;
            }

            if parse_quote_line(line).is_some() {
                flush(&mut blocks, &mut paragraph);
                let mut quoted = Vec::new();
                while let Some(entry) = lines.get(i).and_then(|l| parse_quote_line(l)) {
                    quoted.push(entry);
                    i += 1;
                }
                blocks.push(Block::Quote(build_quote(&quoted, self.pipeline)));
                continue;
            }

            paragraph.push(self.pipeline.parse(line));
            i += 1;
        }

        flush(&mut blocks, &mut paragraph);
        tracing::trace!(lines = lines.len(), blocks = blocks.len(), "parsed blocks");
        Document { blocks }
    }
}

fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<Vec<Inline>>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(std::mem::take(paragraph)));
    }
}

/// Returns the language tag and backtick count of an opening fence.
fn fence_open(line: &str) -> Option<(&str, usize)> {
    let caps = FENCE_RE.captures(line)?;
    Some((caps.get(2).map_or("", |m| m.as_str()), caps.get(1)?.as_str().len()))
}

/// Index of the line closing a fence of `fence_len` backticks.
fn find_fence_close(lines: &[&str], from: usize, fence_len: usize) -> Option<usize> {
    (from..lines.len()).find(|&j| {
        let candidate = lines[j].trim_end();
        candidate.len() == fence_len && candidate.bytes().all(|b| b == b'`')
    })
}

/// Three or more of the same `*`, `-` or `_`, optionally space separated.
fn is_rule(line: &str) -> bool {
    let mut marks = line.chars().filter(|c| !matches!(c, ' ' | '\t'));
    let Some(first) = marks.next() else {
        return false;
    };
    if !matches!(first, '*' | '-' | '_') {
        return false;
    }
    let mut count = 1;
    for c in marks {
        if c != first {
            return false;
        }
        count += 1;
    }
    count >= 3
}

/// `--source` attributes a quote. `---` and longer runs are rules.
fn footer_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("--")?;
    if rest.starts_with('-') {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

/// A non-blank line that no other block construct claims.
fn is_plain(line: &str) -> bool {
    !line.trim().is_empty()
        && fence_open(line).is_none()
        && !HEADING_RE.is_match(line)
        && !is_rule(line)
        && parse_list_line(line).is_none()
        && footer_text(line).is_none()
        && parse_quote_line(line).is_none()
}
