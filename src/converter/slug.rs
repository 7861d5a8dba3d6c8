//! Heading anchor ids.

use crate::core::ast::Inline;

/// Builds a kebab-case id from heading content.
///
/// Code spans, images and bare URLs are dropped; link and colour text is kept
/// without its markup. Only the first `max_words` words are used.
pub fn heading_slug(content: &[Inline], max_words: usize) -> String {
    let mut text = String::new();
    collect_text(content, &mut text);

    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .take(max_words)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn collect_text(nodes: &[Inline], out: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(text),
            Inline::Escaped(ch) => out.push(*ch),
            Inline::Strong(children)
            | Inline::Emphasis(children)
            | Inline::Strike(children)
            | Inline::Color { children, .. }
            | Inline::Link { children, .. } => collect_text(children, out),
            Inline::Code(_) | Inline::Image { .. } | Inline::AutoLink { .. } => out.push(' '),
        }
    }
}
