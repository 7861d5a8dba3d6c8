use super::{split_matches, InlineRule};
use crate::core::ast::Inline;
use regex::Regex;
use std::sync::LazyLock;

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\(([^()\n]+?) color=['"](#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3}))['"]\)"#)
        .expect("color pattern must compile")
});

/// `(text color='#hex')`
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorRule;

impl InlineRule for ColorRule {
    fn name(&self) -> &'static str {
        "color"
    }

    fn apply(&self, text: &str) -> Option<Vec<Inline>> {
        if !text.contains(" color=") {
            return None;
        }
        split_matches(&COLOR_RE, text, |caps| {
            Some(Inline::Color {
                color: caps.get(2)?.as_str().to_string(),
                children: vec![Inline::Text(caps.get(1)?.as_str().to_string())],
            })
        })
    }
}
