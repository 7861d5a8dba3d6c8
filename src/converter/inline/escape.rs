use super::{push_text, InlineRule};
use crate::core::ast::Inline;
use crate::render::is_markup_char;

/// Backslash escapes: `\*` shows a literal asterisk.
#[derive(Debug, Default, Clone, Copy)]
pub struct EscapeRule;

impl InlineRule for EscapeRule {
    fn name(&self) -> &'static str {
        "escape"
    }

    fn apply(&self, text: &str) -> Option<Vec<Inline>> {
        if !text.contains('\\') {
            return None;
        }

        let mut out = Vec::new();
        let mut plain_start = 0;
        let mut matched = false;
        let mut chars = text.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            if ch != '\\' {
                continue;
            }
            let Some(&(_, next)) = chars.peek() else {
                break;
            };
            if is_markup_char(next) {
                push_text(&mut out, &text[plain_start..i]);
                out.push(Inline::Escaped(next));
                chars.next();
                plain_start = i + 1 + next.len_utf8();
                matched = true;
            }
        }

        if !matched {
            return None;
        }
        push_text(&mut out, &text[plain_start..]);
        Some(out)
    }
}
