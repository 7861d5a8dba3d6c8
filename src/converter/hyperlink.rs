//! Hyperlink resolver - classifies link targets and rewrites in-page anchors.

use crate::core::ast::LinkTarget;

/// What a link or image URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// Absolute `http`, `https`, `ftp` or `ftps` URL, or a protocol-relative one.
    External,
    /// In-page anchor (`#section`).
    Anchor,
    /// Scheme-less path on this site.
    Relative,
    Mail,
    Magnet,
}

impl UrlKind {
    pub fn target(self) -> LinkTarget {
        match self {
            UrlKind::External => LinkTarget::Blank,
            _ => LinkTarget::SelfFrame,
        }
    }
}

/// Classifies `url`, returning `None` for schemes that must never reach an
/// `href` or `src` (`javascript:`, `data:`, `vbscript:` and anything unknown).
pub fn classify_url(url: &str) -> Option<UrlKind> {
    if url.starts_with('#') {
        return Some(UrlKind::Anchor);
    }
    if url.starts_with("//") {
        return Some(UrlKind::External);
    }

    let Some(scheme) = scheme_of(url) else {
        return Some(UrlKind::Relative);
    };
    match scheme.to_ascii_lowercase().as_str() {
        "http" | "https" | "ftp" | "ftps" => Some(UrlKind::External),
        "mailto" => Some(UrlKind::Mail),
        "magnet" => Some(UrlKind::Magnet),
        _ => None,
    }
}

/// Everything before a `:` that precedes any `/`, `?` or `#` counts as a
/// scheme, well-formed or not.
fn scheme_of(url: &str) -> Option<&str> {
    let end = url.find(&[':', '/', '?', '#'][..])?;
    (url.as_bytes()[end] == b':').then(|| &url[..end])
}

/// Prefixes an in-page anchor with the current page path so it still resolves
/// after server-side routing.
pub fn resolve_anchor(page_path: &str, anchor: &str) -> String {
    format!("{}{}", page_path, anchor)
}
