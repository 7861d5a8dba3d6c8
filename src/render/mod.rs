mod escape;
mod html;

use crate::core::ast::Document;

pub use escape::{
    escape_code, escape_html_attr, escape_html_text, is_markup_char, push_entity, MARKUP_CHARS,
};
pub use html::{newline_to_break, HtmlRenderer};

pub trait Renderer {
    fn render(&self, document: &Document) -> String;
}
