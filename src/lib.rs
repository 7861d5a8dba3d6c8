//! # konko-markup
//!
//! Post markup renderer and live-preview transcoder for the Konko forum.
//!
//! ## Example
//!
//! ```
//! use konko_markup::{MarkupRenderer, RenderOptions};
//!
//! let options = RenderOptions {
//!     page_path: "/topic/42".into(),
//!     ..Default::default()
//! };
//!
//! let renderer = MarkupRenderer::new(options);
//! let html = renderer.render("**hello** [top](#top)");
//! assert_eq!(
//!     html,
//!     "<strong>hello</strong> <a href=\"/topic/42#top\" target=\"_self\">top</a>"
//! );
//! ```

pub mod converter;
pub mod core;
pub mod editor;
pub mod error;
pub mod render;

pub use converter::MarkupRenderer;
pub use editor::{Editor, EditorMode, LivePreviewTranscoder, Selection, ToolbarAction};
pub use error::{Error, Result};

use serde::Deserialize;
use std::path::Path;

/// Options for markup rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Path of the page the post is shown on; prefixed to `#anchor` links.
    pub page_path: String,
    /// Class attribute of fenced code `<pre>` elements.
    pub code_block_class: String,
    /// Number of words kept in heading ids.
    pub slug_max_words: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_path: String::new(),
            code_block_class: "code".to_string(),
            slug_max_words: 6,
        }
    }
}

impl RenderOptions {
    /// Parses options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads options from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// Renders raw post markup with default options.
pub fn render(raw: &str) -> String {
    MarkupRenderer::with_defaults().render(raw)
}
