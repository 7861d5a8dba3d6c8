//! Inline rules and the pipeline that runs them over a line of text.
//!
//! Each rule only ever sees [`Inline::Text`] leaves, so text claimed by an
//! earlier rule (a code span, an escaped character, a link target) is out of
//! reach for every later one.

mod code;
mod color;
mod emphasis;
mod escape;
mod link;

use crate::core::ast::Inline;
use crate::RenderOptions;
use regex::{Captures, Regex};

pub use self::code::CodeSpanRule;
pub use self::color::ColorRule;
pub use self::emphasis::EmphasisRule;
pub use self::escape::EscapeRule;
pub use self::link::{AutoLinkRule, ImageRule, LinkRule};

/// One named step of the inline grammar.
pub trait InlineRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Splits `text` into nodes. Returns `None` when the rule claims nothing.
    fn apply(&self, text: &str) -> Option<Vec<Inline>>;

    /// Whether the rule may claim text inside an explicit link.
    fn enters_links(&self) -> bool {
        true
    }
}

/// The ordered inline grammar.
pub struct InlinePipeline {
    rules: Vec<Box<dyn InlineRule>>,
}

impl InlinePipeline {
    /// Builds the standard rule order.
    pub fn new(options: &RenderOptions) -> Self {
        Self::with_rules(vec![
            Box::new(CodeSpanRule),
            Box::new(EscapeRule),
            Box::new(LinkRule::new(&options.page_path)),
            Box::new(ImageRule),
            Box::new(AutoLinkRule),
            Box::new(ColorRule),
            Box::new(EmphasisRule),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn InlineRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Parses one line of text into inline nodes.
    pub fn parse(&self, text: &str) -> Vec<Inline> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut nodes = vec![Inline::Text(text.to_string())];
        for rule in &self.rules {
            nodes = apply_rule(rule.as_ref(), nodes);
        }
        nodes
    }
}

fn apply_rule(rule: &dyn InlineRule, nodes: Vec<Inline>) -> Vec<Inline> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Inline::Text(text) => match rule.apply(&text) {
                Some(claimed) => {
                    tracing::trace!(rule = rule.name(), nodes = claimed.len(), "inline rule matched");
                    out.extend(claimed);
                }
                None => out.push(Inline::Text(text)),
            },
            mut other => {
                let descend = rule.enters_links() || !matches!(other, Inline::Link { .. });
                if descend {
                    if let Some(children) = other.children_mut() {
                        let taken = std::mem::take(children);
                        *children = apply_rule(rule, taken);
                    }
                }
                out.push(other);
            }
        }
    }
    out
}

/// Appends `text` as a text node, skipping empty slices.
pub(crate) fn push_text(out: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        out.push(Inline::Text(text.to_string()));
    }
}

/// Replaces every match of `re` that `build` accepts with the node it returns.
/// Rejected matches stay in the surrounding text.
pub(crate) fn split_matches<F>(re: &Regex, text: &str, mut build: F) -> Option<Vec<Inline>>
where
    F: FnMut(&Captures<'_>) -> Option<Inline>,
{
    let mut out = Vec::new();
    let mut last = 0;
    let mut matched = false;

    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let Some(node) = build(&caps) else {
            continue;
        };
        push_text(&mut out, &text[last..whole.start()]);
        out.push(node);
        last = whole.end();
        matched = true;
    }

    if !matched {
        return None;
    }
    push_text(&mut out, &text[last..]);
    Some(out)
}
