use super::{push_text, split_matches, InlineRule};
use crate::converter::hyperlink::{classify_url, resolve_anchor, UrlKind};
use crate::core::ast::Inline;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]\n]*)\]\(\s*([^\s()"]+)(?:\s+"([^"\n]*)")?\s*\)"#)
        .expect("image pattern must compile")
});

/// Link text is either one whole image or anything without `]`.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\[(!\[[^\]\n]*\]\([^()\n]*\)|[^\]\n]+)\]\(\s*([^\s()"]+)(?:\s+"([^"\n]*)")?\s*\)"#,
    )
    .expect("link pattern must compile")
});

static AUTOLINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:(?:https?|ftps?)://|magnet:\?)[^\s<>"'\[\]()]+"#)
        .expect("autolink pattern must compile")
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '*', '_', '~'];

/// Emphasis delimiters that may hug a bare URL, longest first.
const URL_DELIMITERS: &[&str] = &["**", "__", "~~", "*", "_"];

fn delimited(delimiter: &str, children: Vec<Inline>) -> Inline {
    match delimiter {
        "**" | "__" => Inline::Strong(children),
        "~~" => Inline::Strike(children),
        _ => Inline::Emphasis(children),
    }
}

fn title_of(caps: &Captures<'_>) -> Option<String> {
    caps.get(3).map(|m| m.as_str().to_string())
}

/// `![alt](url "title")`
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageRule;

impl InlineRule for ImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn apply(&self, text: &str) -> Option<Vec<Inline>> {
        if !text.contains("![") {
            return None;
        }
        split_matches(&IMAGE_RE, text, |caps| {
            let src = caps.get(2)?.as_str();
            match classify_url(src) {
                Some(UrlKind::External | UrlKind::Relative) => Some(Inline::Image {
                    alt: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                    src: src.to_string(),
                    title: title_of(caps),
                }),
                _ => {
                    tracing::debug!(src, "image source rejected");
                    None
                }
            }
        })
    }
}

/// `[text](url "title")`
#[derive(Debug, Default, Clone)]
pub struct LinkRule {
    page_path: String,
}

impl LinkRule {
    pub fn new(page_path: &str) -> Self {
        Self {
            page_path: page_path.to_string(),
        }
    }
}

impl InlineRule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn apply(&self, text: &str) -> Option<Vec<Inline>> {
        if !text.contains("](") {
            return None;
        }
        split_matches(&LINK_RE, text, |caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?.as_str();
            // `![..](..)` belongs to the image rule, and a label that opens an
            // image must hold all of it.
            if text[..whole.start()].ends_with('!')
                || (label.starts_with("![") && !label.ends_with(')'))
            {
                return None;
            }
            let url = caps.get(2)?.as_str();
            let Some(kind) = classify_url(url) else {
                tracing::debug!(url, "link target rejected");
                return None;
            };
            let href = match kind {
                UrlKind::Anchor => resolve_anchor(&self.page_path, url),
                _ => url.to_string(),
            };
            Some(Inline::Link {
                href,
                title: title_of(caps),
                target: kind.target(),
                children: vec![Inline::Text(label.to_string())],
            })
        })
    }
}

/// Bare `http(s)`, `ftp(s)` and `magnet:` URLs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoLinkRule;

impl InlineRule for AutoLinkRule {
    fn name(&self) -> &'static str {
        "autolink"
    }

    fn apply(&self, text: &str) -> Option<Vec<Inline>> {
        let mut out = Vec::new();
        let mut last = 0;
        let mut matched = false;

        for m in AUTOLINK_RE.find_iter(text) {
            let url = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            let Some(kind) = classify_url(url) else {
                continue;
            };
            let node = Inline::AutoLink {
                url: url.to_string(),
                target: kind.target(),
            };
            let before = &text[last..m.start()];
            let trimmed = &m.as_str()[url.len()..];
            let hugging = URL_DELIMITERS
                .iter()
                .find(|d| before.ends_with(**d) && trimmed.starts_with(**d));

            match hugging {
                // `**https://x.com**` keeps its emphasis
                Some(delimiter) => {
                    push_text(&mut out, &before[..before.len() - delimiter.len()]);
                    out.push(delimited(delimiter, vec![node]));
                    last = m.start() + url.len() + delimiter.len();
                }
                None => {
                    push_text(&mut out, before);
                    out.push(node);
                    last = m.start() + url.len();
                }
            }
            matched = true;
        }

        if !matched {
            return None;
        }
        push_text(&mut out, &text[last..]);
        Some(out)
    }

    fn enters_links(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::LinkTarget;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_external_link_opens_blank() {
        assert_eq!(
            LinkRule::new("").apply("[t](http://x.com)"),
            Some(vec![Inline::Link {
                href: "http://x.com".to_string(),
                title: None,
                target: LinkTarget::Blank,
                children: vec![Inline::Text("t".to_string())],
            }])
        );
    }

    #[test]
    fn test_anchor_link_gets_page_path() {
        assert_eq!(
            LinkRule::new("/topic/7").apply("see [t](#anchor \"Part\")"),
            Some(vec![
                Inline::Text("see ".to_string()),
                Inline::Link {
                    href: "/topic/7#anchor".to_string(),
                    title: Some("Part".to_string()),
                    target: LinkTarget::SelfFrame,
                    children: vec![Inline::Text("t".to_string())],
                },
            ])
        );
    }

    #[test]
    fn test_script_link_stays_text() {
        assert_eq!(LinkRule::new("").apply("[x](javascript:alert(1))"), None);
    }

    #[test]
    fn test_image_with_title() {
        assert_eq!(
            ImageRule.apply("![cat](/i/cat.png \"Cat\")"),
            Some(vec![Inline::Image {
                alt: "cat".to_string(),
                src: "/i/cat.png".to_string(),
                title: Some("Cat".to_string()),
            }])
        );
    }

    #[test]
    fn test_autolink_trims_sentence_punctuation() {
        assert_eq!(
            AutoLinkRule.apply("go to https://x.com/a_b."),
            Some(vec![
                Inline::Text("go to ".to_string()),
                Inline::AutoLink {
                    url: "https://x.com/a_b".to_string(),
                    target: LinkTarget::Blank,
                },
                Inline::Text(".".to_string()),
            ])
        );
    }

    #[test]
    fn test_autolink_leaves_emphasis_delimiters_out() {
        let link = |url: &str| Inline::AutoLink {
            url: url.to_string(),
            target: LinkTarget::Blank,
        };
        assert_eq!(
            AutoLinkRule.apply("**https://x.com**"),
            Some(vec![Inline::Strong(vec![link("https://x.com")])])
        );
        assert_eq!(
            AutoLinkRule.apply("see *http://a.com/b* now"),
            Some(vec![
                Inline::Text("see ".to_string()),
                Inline::Emphasis(vec![link("http://a.com/b")]),
                Inline::Text(" now".to_string()),
            ])
        );
        assert_eq!(
            AutoLinkRule.apply("http://a.com/b~~"),
            Some(vec![link("http://a.com/b"), Inline::Text("~~".to_string())])
        );
    }

    #[test]
    fn test_linked_image_is_one_link() {
        assert_eq!(
            LinkRule::new("").apply("[![a](/i.png)](http://x.com)"),
            Some(vec![Inline::Link {
                href: "http://x.com".to_string(),
                title: None,
                target: LinkTarget::Blank,
                children: vec![Inline::Text("![a](/i.png)".to_string())],
            }])
        );
    }

    #[test]
    fn test_link_rule_skips_images() {
        assert_eq!(LinkRule::new("").apply("![a](/i.png)"), None);
        assert_eq!(LinkRule::new("").apply("[![a](/i.png) more](x)"), None);
    }

    #[test]
    fn test_magnet_opens_in_same_frame() {
        assert_eq!(
            AutoLinkRule.apply("magnet:?xt=urn:btih:abc"),
            Some(vec![Inline::AutoLink {
                url: "magnet:?xt=urn:btih:abc".to_string(),
                target: LinkTarget::SelfFrame,
            }])
        );
    }
}
