//! Toolbar actions for both editor surfaces.
//!
//! The markup surface edits delimiters in the raw text; the WYSIWYG surface
//! wraps the selected HTML in tags. The paths share only the action type.

use super::Selection;
use crate::render::{escape_html_attr, escape_html_text};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    Bold,
    Italic,
    Strike,
    Link(String),
    Image(String),
    Quote,
    /// `#rgb` or `#rrggbb`.
    Color(String),
    HorizontalRule,
}

fn check_color(color: &str) -> Result<()> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidColor(color.to_string()))
    }
}

/// Replaces the selected range with `prefix + inner + suffix`, returning the
/// range of `inner` afterwards.
fn wrap(buffer: &mut String, selection: Selection, prefix: &str, inner: &str, suffix: &str) -> Selection {
    let replacement = format!("{}{}{}", prefix, inner, suffix);
    buffer.replace_range(selection.start..selection.end, &replacement);
    let start = selection.start + prefix.len();
    Selection::new(start, start + inner.len())
}

fn insert_at_end(buffer: &mut String, selection: Selection, text: &str) -> Selection {
    buffer.insert_str(selection.end, text);
    Selection::caret(selection.end + text.len())
}

/// Applies `action` to raw markup.
pub(crate) fn apply_markup(
    buffer: &mut String,
    action: &ToolbarAction,
    selection: Selection,
) -> Result<Selection> {
    selection.check(buffer)?;
    let selected = buffer[selection.start..selection.end].to_string();

    let updated = match action {
        ToolbarAction::Bold => wrap(buffer, selection, "**", &selected, "**"),
        ToolbarAction::Italic => wrap(buffer, selection, "_", &selected, "_"),
        ToolbarAction::Strike => wrap(buffer, selection, "~~", &selected, "~~"),
        ToolbarAction::Link(url) => {
            let text = if selected.is_empty() { url.as_str() } else { selected.as_str() };
            wrap(buffer, selection, "[", text, &format!("]({})", url))
        }
        ToolbarAction::Image(url) => wrap(buffer, selection, "![", &selected, &format!("]({})", url)),
        ToolbarAction::Color(color) => {
            check_color(color)?;
            wrap(buffer, selection, "(", &selected, &format!(" color='{}')", color))
        }
        ToolbarAction::Quote => {
            let line_start = buffer[..selection.start].rfind('\n').map_or(0, |i| i + 1);
            let quoted = buffer[line_start..selection.end]
                .split('\n')
                .map(|line| format!("> {}", line))
                .collect::<Vec<_>>()
                .join("\n");
            buffer.replace_range(line_start..selection.end, &quoted);
            Selection::new(selection.start + 2, line_start + quoted.len())
        }
        ToolbarAction::HorizontalRule => insert_at_end(buffer, selection, "\n***\n"),
    };
    Ok(updated)
}

/// Applies `action` to the WYSIWYG surface's HTML.
pub(crate) fn apply_wysiwyg(
    html: &mut String,
    action: &ToolbarAction,
    selection: Selection,
) -> Result<Selection> {
    selection.check(html)?;
    let selected = html[selection.start..selection.end].to_string();

    let updated = match action {
        ToolbarAction::Bold => wrap(html, selection, "<b>", &selected, "</b>"),
        ToolbarAction::Italic => wrap(html, selection, "<i>", &selected, "</i>"),
        ToolbarAction::Strike => wrap(html, selection, "<s>", &selected, "</s>"),
        ToolbarAction::Link(url) => {
            let text = if selected.is_empty() { escape_html_text(url) } else { selected };
            wrap(
                html,
                selection,
                &format!("<a href=\"{}\">", escape_html_attr(url)),
                &text,
                "</a>",
            )
        }
        // The selected text becomes the alt attribute, so only a caret is left.
        ToolbarAction::Image(url) => {
            let tag = format!(
                "<img alt=\"{}\" src=\"{}\">",
                escape_html_attr(&selected),
                escape_html_attr(url)
            );
            html.replace_range(selection.start..selection.end, &tag);
            Selection::caret(selection.start + tag.len())
        }
        ToolbarAction::Color(color) => {
            check_color(color)?;
            wrap(
                html,
                selection,
                &format!("<span style=\"color:{}\">", color),
                &selected,
                "</span>",
            )
        }
        ToolbarAction::Quote => wrap(html, selection, "<blockquote>", &selected, "</blockquote>"),
        ToolbarAction::HorizontalRule => insert_at_end(html, selection, "<hr>"),
    };
    Ok(updated)
}
