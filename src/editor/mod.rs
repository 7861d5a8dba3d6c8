//! Post editor state: a markup text surface and a WYSIWYG surface, only one of
//! which is editable at a time.

mod toolbar;
mod transcoder;

use crate::{Error, RenderOptions, Result};

pub use self::toolbar::ToolbarAction;
pub use self::transcoder::{html_to_markup, LivePreviewTranscoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Markup,
    Wysiwyg,
}

/// Byte range in the active surface. `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(at: usize) -> Self {
        Self::new(at, at)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn check(&self, buffer: &str) -> Result<()> {
        if self.start <= self.end
            && self.end <= buffer.len()
            && buffer.is_char_boundary(self.start)
            && buffer.is_char_boundary(self.end)
        {
            Ok(())
        } else {
            Err(Error::InvalidSelection {
                start: self.start,
                end: self.end,
                len: buffer.len(),
            })
        }
    }
}

/// The editor. Switching modes runs exactly one conversion: markup to
/// preview HTML when entering WYSIWYG, HTML back to markup when leaving it.
pub struct Editor {
    mode: EditorMode,
    markup: String,
    html: String,
    transcoder: LivePreviewTranscoder,
}

impl Editor {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_markup(options, "")
    }

    /// Opens an existing post for editing in markup mode.
    pub fn with_markup(options: RenderOptions, raw: &str) -> Self {
        Self {
            mode: EditorMode::Markup,
            markup: raw.to_string(),
            html: String::new(),
            transcoder: LivePreviewTranscoder::new(options),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Content of the active surface.
    pub fn content(&self) -> &str {
        match self.mode {
            EditorMode::Markup => &self.markup,
            EditorMode::Wysiwyg => &self.html,
        }
    }

    /// Content-change event: replaces the active surface's content.
    pub fn input(&mut self, content: impl Into<String>) {
        match self.mode {
            EditorMode::Markup => self.markup = content.into(),
            EditorMode::Wysiwyg => self.html = content.into(),
        }
    }

    /// Raw markup for saving. In WYSIWYG mode this reads through the reverse
    /// transform without leaving the mode.
    pub fn markup(&self) -> String {
        match self.mode {
            EditorMode::Markup => self.markup.clone(),
            EditorMode::Wysiwyg => self.transcoder.to_markup(&self.html),
        }
    }

    /// Rendered preview of the current content.
    pub fn preview(&self) -> String {
        match self.mode {
            EditorMode::Markup => self.transcoder.to_preview(&self.markup),
            EditorMode::Wysiwyg => self.html.clone(),
        }
    }

    pub fn toggle_mode(&mut self) -> EditorMode {
        self.mode = match self.mode {
            EditorMode::Markup => {
                self.html = self.transcoder.to_preview(&self.markup);
                EditorMode::Wysiwyg
            }
            EditorMode::Wysiwyg => {
                self.markup = self.transcoder.to_markup(&self.html);
                EditorMode::Markup
            }
        };
        tracing::debug!(mode = ?self.mode, "editor mode switched");
        self.mode
    }

    /// Runs a toolbar action on the active surface.
    pub fn apply(&mut self, action: &ToolbarAction, selection: Selection) -> Result<Selection> {
        match self.mode {
            EditorMode::Markup => toolbar::apply_markup(&mut self.markup, action, selection),
            EditorMode::Wysiwyg => toolbar::apply_wysiwyg(&mut self.html, action, selection),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
