use crate::core::ast::{Block, Document, Inline, List, Quote, QuoteItem};
use crate::render::escape::{escape_code, escape_html_attr, escape_html_text, push_entity};
use crate::render::Renderer;
use crate::RenderOptions;

/// Writes a [`Document`] as HTML.
///
/// Blocks and paragraph lines are separated by `\n` while writing; the last
/// step turns every separator into `<br/>`, so block rules never see the
/// breaks that belong to the text around them.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    code_block_class: String,
}

impl HtmlRenderer {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            code_block_class: options.code_block_class.clone(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, document: &Document) -> String {
        let mut out = String::new();

        for (i, block) in document.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.write_block(&mut out, block);
        }

        newline_to_break(&out)
    }
}

impl HtmlRenderer {
    fn write_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Code { lang, lines } => {
                out.push_str(&format!(
                    "<pre class=\"{}\"><code lang=\"{}\">",
                    escape_html_attr(&self.code_block_class),
                    escape_html_attr(lang)
                ));
                let body: Vec<String> = lines.iter().map(|line| escape_code(line)).collect();
                out.push_str(&body.join("<br/>"));
                out.push_str("</code></pre>");
            }
            Block::Heading { level, id, content } => {
                match id {
                    Some(id) => {
                        out.push_str(&format!("<h{} id=\"{}\">", level, escape_html_attr(id)))
                    }
                    None => out.push_str(&format!("<h{}>", level)),
                }
                write_inlines(out, content);
                out.push_str(&format!("</h{}>", level));
            }
            Block::Rule => out.push_str("<hr/>"),
            Block::List(list) => write_list(out, list),
            Block::Footer(content) => {
                out.push_str("<footer class=\"blockquote-footer\">");
                write_inlines(out, content);
                out.push_str("</footer>");
            }
            Block::Quote(quote) => write_quote(out, quote),
            Block::Paragraph(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_inlines(out, line);
                }
            }
        }
    }
}

fn write_list(out: &mut String, list: &List) {
    let tag = list.kind.tag();
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in &list.items {
        out.push_str("<li>");
        write_inlines(out, &item.content);
        for child in &item.children {
            write_list(out, child);
        }
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_quote(out: &mut String, quote: &Quote) {
    out.push_str("<blockquote>");
    let mut previous_was_line = false;
    for item in &quote.items {
        match item {
            QuoteItem::Line(content) => {
                if previous_was_line {
                    out.push('\n');
                }
                write_inlines(out, content);
                previous_was_line = true;
            }
            QuoteItem::Nested(inner) => {
                write_quote(out, inner);
                previous_was_line = false;
            }
        }
    }
    out.push_str("</blockquote>");
}

fn write_inlines(out: &mut String, nodes: &[Inline]) {
    for node in nodes {
        write_inline(out, node);
    }
}

fn write_inline(out: &mut String, node: &Inline) {
    match node {
        Inline::Text(text) => out.push_str(&escape_html_text(text)),
        Inline::Escaped(ch) => push_entity(out, *ch),
        Inline::Code(code) => {
            out.push_str("<code>");
            out.push_str(&escape_code(code));
            out.push_str("</code>");
        }
        Inline::Strong(children) => wrap(out, "strong", children),
        Inline::Emphasis(children) => wrap(out, "em", children),
        Inline::Strike(children) => wrap(out, "del", children),
        Inline::Color { color, children } => {
            out.push_str(&format!(
                "<span style=\"color:{}\">",
                escape_html_attr(color)
            ));
            write_inlines(out, children);
            out.push_str("</span>");
        }
        Inline::Link {
            href,
            title,
            target,
            children,
        } => {
            out.push_str(&format!("<a href=\"{}\"", escape_html_attr(href)));
            if let Some(title) = title {
                out.push_str(&format!(" title=\"{}\"", escape_html_attr(title)));
            }
            out.push_str(&format!(" target=\"{}\">", target.as_str()));
            write_inlines(out, children);
            out.push_str("</a>");
        }
        Inline::Image { alt, src, title } => {
            out.push_str(&format!(
                "<img alt=\"{}\" src=\"{}\"",
                escape_html_attr(alt),
                escape_html_attr(src)
            ));
            if let Some(title) = title {
                out.push_str(&format!(" title=\"{}\"", escape_html_attr(title)));
            }
            out.push('>');
        }
        Inline::AutoLink { url, target } => {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"{}\">{}</a>",
                escape_html_attr(url),
                target.as_str(),
                escape_html_text(url)
            ));
        }
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Inline]) {
    out.push_str(&format!("<{}>", tag));
    write_inlines(out, children);
    out.push_str(&format!("</{}>", tag));
}

/// Final pass: every remaining newline becomes a line break.
pub fn newline_to_break(html: &str) -> String {
    html.replace('\n', "<br/>")
}
