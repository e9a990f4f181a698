//! MDAST-based document renderer.
//!
//! Walks a serialized [`Document`](inkpost_core::Document) and emits the
//! article body HTML, routing every mapped tag through the
//! tag-to-component map and letting everything else fall back to plain
//! unstyled markup.
//!
//! # Module structure
//!
//! - `context` - output buffer, scope stack, escaping
//! - `render` - per-node rendering functions

mod context;
mod render;

pub use context::{Context, Scope};

use crate::components::ComponentMap;
use inkpost_core::Document;
use render::render_node;
use serde::{Deserialize, Serialize};

/// Rendering options for the document renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Whether to add `loading="lazy"` to images.
    #[serde(default = "default_lazy_images")]
    pub lazy_images: bool,
}

fn default_lazy_images() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lazy_images: default_lazy_images(),
        }
    }
}

/// Renders a serialized document to article-body HTML.
///
/// Deterministic: the same document, map, and options always produce the
/// same output. Unmapped tags and components degrade to unstyled markup
/// rather than failing.
pub fn render_document(document: &Document, map: &ComponentMap, options: &RenderOptions) -> String {
    let mut ctx = Context::new(map, options);
    render_node(document.root(), &mut ctx);
    ctx.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentStyle, DEFAULT_COMPONENTS, Tag};
    use inkpost_core::serialize;

    fn render(input: &str) -> String {
        let doc = serialize(input).expect("markup should serialize");
        render_document(&doc, &DEFAULT_COMPONENTS, &RenderOptions::default())
    }

    #[test]
    fn renders_styled_paragraph_with_bold_text() {
        insta::assert_snapshot!(
            render("Hello **world**"),
            @r#"<p class="article-paragraph">Hello <strong>world</strong></p>"#
        );
    }

    #[test]
    fn renders_mapped_headings_and_falls_back_on_others() {
        let html = render("## Two\n\n### Three\n\n#### Four");
        assert!(html.contains(r#"<h2 class="article-heading-second">Two</h2>"#));
        assert!(html.contains(r#"<h3 class="article-heading-third">Three</h3>"#));
        assert!(html.contains("<h4>Four</h4>"));
    }

    #[test]
    fn hyperlink_without_target_renders_children_only() {
        let html = render("[orphaned]()");
        assert!(html.contains("orphaned"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn hyperlink_with_target_is_styled() {
        let html = render("[docs](https://example.com/docs)");
        assert!(
            html.contains(r#"<a class="article-anchor" href="https://example.com/docs">docs</a>"#)
        );
    }

    #[test]
    fn component_link_without_href_degrades_to_children() {
        let html = render("<Link>just text</Link>");
        assert!(html.contains("just text"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn component_link_with_href_is_styled() {
        let html = render(r#"<Link href="/about">about us</Link>"#);
        assert!(html.contains(r#"<a class="article-link" href="/about">about us</a>"#));
    }

    #[test]
    fn quote_component_renders_styled_blockquote() {
        let html = render("<Quote>Stay hungry.</Quote>");
        assert!(html.contains(r#"<blockquote class="article-quote">"#));
        assert!(html.contains("Stay hungry."));
    }

    #[test]
    fn article_image_component_normalizes_src() {
        let html = render(r#"<ArticleImage src="/images//cover.png" alt="Cover" />"#);
        assert!(html.contains(r#"<figure class="article-image">"#));
        assert!(html.contains(r#"src="/images/cover.png""#));
        assert!(html.contains(r#"alt="Cover""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn markdown_image_normalizes_src() {
        let html = render("![alt text](/images//photo.png)");
        assert!(html.contains(r#"src="/images/photo.png""#));
        assert!(html.contains(r#"class="article-inline-image""#));
    }

    #[test]
    fn inline_code_is_highlighted() {
        insta::assert_snapshot!(
            render("Use `cargo build` here"),
            @r#"<p class="article-paragraph">Use <code class="article-highlight">cargo build</code> here</p>"#
        );
    }

    #[test]
    fn fenced_code_gets_language_class() {
        let html = render("```rust\nlet x = 1;\n```");
        assert!(html.contains(r#"<pre class="article-code"><code class="language-rust">"#));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn unknown_component_passes_through_unstyled() {
        let html = render(r#"<CalendlyEmbed url="https://calendly.com/acme">book</CalendlyEmbed>"#);
        assert!(html.contains(r#"<CalendlyEmbed url="https://calendly.com/acme">"#));
        assert!(html.contains("book"));
        assert!(!html.contains("class="));
    }

    #[test]
    fn unmapped_markdown_constructs_render_unstyled() {
        let html = render("> quoted\n\n- one\n- two");
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<ul><li>one</li><li>two</li></ul>"));
    }

    #[test]
    fn tight_list_suppresses_paragraph_wrappers() {
        let html = render("- one\n- two");
        assert!(!html.contains("<p"));
    }

    #[test]
    fn inline_html_tags_pass_through_as_unmapped_elements() {
        let html = render("text with a <b>bold</b> claim");
        assert!(html.contains("<b>bold</b>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "## Title\n\nBody with [link](https://example.com) and `code`.\n";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn empty_map_renders_everything_unstyled() {
        let doc = serialize("Hello **world**").expect("serialize");
        let map = ComponentMap::new();
        let html = render_document(&doc, &map, &RenderOptions::default());
        assert_eq!(html, "<p>Hello <strong>world</strong></p>");
    }

    #[test]
    fn custom_map_overrides_classes() {
        let mut map = ComponentMap::new();
        map.insert(Tag::Paragraph, ComponentStyle::new("prose"));
        let doc = serialize("plain words").expect("serialize");
        let html = render_document(&doc, &map, &RenderOptions::default());
        assert_eq!(html, r#"<p class="prose">plain words</p>"#);
    }
}
