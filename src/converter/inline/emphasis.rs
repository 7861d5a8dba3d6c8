use super::{push_text, InlineRule};
use crate::core::ast::Inline;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    StrongEmphasis,
    Strong,
    Emphasis,
    Strike,
}

impl Style {
    fn node(self, children: Vec<Inline>) -> Inline {
        match self {
            Style::StrongEmphasis => Inline::Strong(vec![Inline::Emphasis(children)]),
            Style::Strong => Inline::Strong(children),
            Style::Emphasis => Inline::Emphasis(children),
            Style::Strike => Inline::Strike(children),
        }
    }
}

/// Delimiter patterns in tie-break order: on equal start positions the
/// earlier entry wins, so `***` beats `**` and `**` beats `*`.
static DELIMITERS: LazyLock<Vec<(Style, Regex)>> = LazyLock::new(|| {
    [
        (Style::StrongEmphasis, r"\*\*\*(.+?)\*\*\*"),
        (Style::StrongEmphasis, r"\b___(.+?)___\b"),
        (Style::Strong, r"\*\*(.+?)\*\*"),
        (Style::Strong, r"\b__(.+?)__\b"),
        (Style::Strike, r"~~(.+?)~~"),
        (Style::Emphasis, r"\*([^*]+?)\*"),
        (Style::Emphasis, r"\b_([^_]+?)_\b"),
    ]
    .into_iter()
    .map(|(style, pattern)| {
        (
            style,
            Regex::new(pattern).expect("emphasis pattern must compile"),
        )
    })
    .collect()
});

/// `**strong**`, `__strong__`, `*em*`, `_em_`, `~~strike~~`, and `***both***`.
///
/// Leftmost match wins. The content between a delimiter pair is parsed again
/// for nested styles; the pair itself never spans a node claimed earlier
/// because this rule only sees one text leaf at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmphasisRule;

struct Found {
    style: Style,
    start: usize,
    end: usize,
    inner_start: usize,
    inner_end: usize,
}

fn earliest(text: &str, from: usize) -> Option<Found> {
    let mut best: Option<Found> = None;
    for (style, re) in DELIMITERS.iter() {
        let Some(caps) = re.captures_at(text, from) else {
            continue;
        };
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if best.as_ref().map_or(true, |b| whole.start() < b.start) {
            best = Some(Found {
                style: *style,
                start: whole.start(),
                end: whole.end(),
                inner_start: inner.start(),
                inner_end: inner.end(),
            });
        }
    }
    best
}

impl InlineRule for EmphasisRule {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn apply(&self, text: &str) -> Option<Vec<Inline>> {
        if !text.contains(&['*', '_', '~'][..]) {
            return None;
        }

        let mut out = Vec::new();
        let mut pos = 0;
        let mut matched = false;

        while let Some(found) = earliest(text, pos) {
            push_text(&mut out, &text[pos..found.start]);
            let inner = &text[found.inner_start..found.inner_end];
            let children = self
                .apply(inner)
                .unwrap_or_else(|| vec![Inline::Text(inner.to_string())]);
            out.push(found.style.node(children));
            pos = found.end;
            matched = true;
        }

        if !matched {
            return None;
        }
        push_text(&mut out, &text[pos..]);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn test_triple_delimiter_is_strong_and_em() {
        let both = Some(vec![Inline::Strong(vec![Inline::Emphasis(vec![text("x")])])]);
        assert_eq!(EmphasisRule.apply("***x***"), both);
        assert_eq!(EmphasisRule.apply("___x___"), both);
        assert_eq!(
            EmphasisRule.apply("***a** b*"),
            Some(vec![Inline::Strong(vec![text("*a")]), text(" b*")])
        );
    }

    #[test]
    fn test_strong_beats_emphasis_on_same_start() {
        assert_eq!(
            EmphasisRule.apply("**a**"),
            Some(vec![Inline::Strong(vec![text("a")])])
        );
    }

    #[test]
    fn test_all_styles() {
        assert_eq!(
            EmphasisRule.apply("__s__ *e* _u_ ~~d~~"),
            Some(vec![
                Inline::Strong(vec![text("s")]),
                text(" "),
                Inline::Emphasis(vec![text("e")]),
                text(" "),
                Inline::Emphasis(vec![text("u")]),
                text(" "),
                Inline::Strike(vec![text("d")]),
            ])
        );
    }

    #[test]
    fn test_nested_styles() {
        assert_eq!(
            EmphasisRule.apply("**a _b_**"),
            Some(vec![Inline::Strong(vec![
                text("a "),
                Inline::Emphasis(vec![text("b")]),
            ])])
        );
    }

    #[test]
    fn test_non_greedy_pairs() {
        assert_eq!(
            EmphasisRule.apply("**a** b **c**"),
            Some(vec![
                Inline::Strong(vec![text("a")]),
                text(" b "),
                Inline::Strong(vec![text("c")]),
            ])
        );
    }

    #[test]
    fn test_intraword_underscores_are_literal() {
        assert_eq!(EmphasisRule.apply("snake_case_name"), None);
    }

    #[test]
    fn test_unterminated_is_literal() {
        assert_eq!(EmphasisRule.apply("**unterminated"), None);
    }
}
