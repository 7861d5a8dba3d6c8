//! Conversion between post markup and the editor's WYSIWYG surface.

use crate::converter::MarkupRenderer;
use crate::RenderOptions;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)\b[^>]*>").expect("tag pattern must compile")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(amp|lt|gt|quot|apos|nbsp|#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6});")
        .expect("entity pattern must compile")
});

/// Markup to preview HTML and back.
///
/// `to_preview` is the full renderer. `to_markup` only understands what a
/// rich-edit surface produces on its own (bold, italic, strike, line breaks);
/// every other tag is dropped and only its text survives.
pub struct LivePreviewTranscoder {
    renderer: MarkupRenderer,
}

impl LivePreviewTranscoder {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: MarkupRenderer::new(options),
        }
    }

    pub fn to_preview(&self, raw: &str) -> String {
        self.renderer.render(raw)
    }

    pub fn to_markup(&self, html: &str) -> String {
        html_to_markup(html)
    }
}

impl Default for LivePreviewTranscoder {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Lossy reverse transform from editor HTML to markup.
pub fn html_to_markup(html: &str) -> String {
    let markup = TAG_RE.replace_all(html, |caps: &Captures<'_>| {
        let closing = !caps[1].is_empty();
        match caps[2].to_ascii_lowercase().as_str() {
            "b" | "strong" => "**",
            "i" | "em" => "__",
            "s" | "strike" | "del" => "~~",
            "br" => "\n",
            "div" | "p" if closing => "\n",
            _ => "",
        }
    });
    decode_entities(&markup)
}

fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let name = &caps[1];
            match name {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => " ".to_string(),
                _ => decode_numeric(name).unwrap_or_else(|| caps[0].to_string()),
            }
        })
        .into_owned()
}

fn decode_numeric(name: &str) -> Option<String> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(&['x', 'X'][..]) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code).map(String::from)
}
