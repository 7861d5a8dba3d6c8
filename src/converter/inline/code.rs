use super::{push_text, InlineRule};
use crate::core::ast::Inline;

/// Backtick code spans. A run of N backticks closes on the next run of exactly
/// N; an unclosed run stays literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeSpanRule;

impl InlineRule for CodeSpanRule {
    fn name(&self) -> &'static str {
        "code"
    }

    fn apply(&self, text: &str) -> Option<Vec<Inline>> {
        if !text.contains('`') {
            return None;
        }

        let bytes = text.as_bytes();
        let mut out = Vec::new();
        let mut plain_start = 0;
        let mut matched = false;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'`' {
                i += 1;
                continue;
            }
            let run = run_length(bytes, i);
            match find_closing(bytes, i + run, run) {
                Some(close) => {
                    push_text(&mut out, &text[plain_start..i]);
                    out.push(Inline::Code(text[i + run..close].to_string()));
                    i = close + run;
                    plain_start = i;
                    matched = true;
                }
                None => i += run,
            }
        }

        if !matched {
            return None;
        }
        push_text(&mut out, &text[plain_start..]);
        Some(out)
    }
}

fn run_length(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|&&b| b == b'`').count()
}

fn find_closing(bytes: &[u8], from: usize, run: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == b'`' {
            let len = run_length(bytes, j);
            if len == run {
                return Some(j);
            }
            j += len;
        } else {
            j += 1;
        }
    }
    None
}
