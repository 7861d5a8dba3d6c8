//! Converter modules for post markup to HTML transformation.

mod block;
mod hyperlink;
pub mod inline;
mod list;
mod quote;
mod slug;

use crate::core::ast::Document;
use crate::render::{HtmlRenderer, Renderer};
use crate::RenderOptions;

pub use self::block::BlockParser;
pub use self::hyperlink::{classify_url, resolve_anchor, UrlKind};
pub use self::inline::{InlinePipeline, InlineRule};
pub use self::list::{parse_list_line, ListBuilder, ListLine, MAX_LIST_DEPTH};
pub use self::quote::{build_quote, parse_quote_line, MAX_QUOTE_DEPTH};
pub use self::slug::heading_slug;

/// Main renderer that turns raw post markup into display HTML.
///
/// Rendering is total: any input produces some HTML, and text that matches no
/// construct comes out escaped.
pub struct MarkupRenderer {
    options: RenderOptions,
    pipeline: InlinePipeline,
    html: HtmlRenderer,
}

impl MarkupRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        let pipeline = InlinePipeline::new(&options);
        let html = HtmlRenderer::new(&options);
        Self {
            options,
            pipeline,
            html,
        }
    }

    /// Creates a new renderer with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn pipeline(&self) -> &InlinePipeline {
        &self.pipeline
    }

    /// Parses raw markup into the block tree without writing HTML.
    pub fn parse(&self, raw: &str) -> Document {
        BlockParser::new(&self.pipeline, self.options.slug_max_words).parse(raw)
    }

    /// Renders raw markup to HTML.
    pub fn render(&self, raw: &str) -> String {
        let document = self.parse(raw);
        let html = self.html.render(&document);
        tracing::debug!(
            input_len = raw.len(),
            blocks = document.blocks.len(),
            output_len = html.len(),
            "rendered post"
        );
        html
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarkupRenderer>();
    }

    #[test]
    fn test_page_path_reaches_links() {
        let renderer = MarkupRenderer::new(RenderOptions {
            page_path: "/t/3".to_string(),
            ..Default::default()
        });
        assert_eq!(
            renderer.render("[up](#top)"),
            "<a href=\"/t/3#top\" target=\"_self\">up</a>"
        );
    }

    #[test]
    fn test_slug_word_limit_is_configurable() {
        let renderer = MarkupRenderer::new(RenderOptions {
            slug_max_words: 2,
            ..Default::default()
        });
        assert_eq!(
            renderer.render("## A long heading here"),
            "<h2 id=\"a-long\">A long heading here</h2>"
        );
    }
}
