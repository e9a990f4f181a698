//! Page-head emitters: document metadata, OpenGraph preview tags, and
//! structured data for a single article.
//!
//! These are presentational sinks: they consume the post metadata and the
//! slug and emit head markup, with no state of their own.

use crate::enhance::PRISM_THEME_HREF;
use crate::page::SiteOptions;
use inkpost_core::display::normalize_image_url;
use inkpost_core::store::PostMeta;
use serde_json::json;

fn push_escaped(out: &mut String, text: &str) {
    html_escape::encode_double_quoted_attribute_to_string(text, out);
}

/// Absolute, normalized image URL for preview tags.
fn absolute_image_url(meta: &PostMeta, options: &SiteOptions) -> String {
    if meta.image_url.contains("://") {
        normalize_image_url(&meta.image_url)
    } else {
        normalize_image_url(&format!("{}/{}", options.base_url, meta.image_url))
    }
}

/// Canonical URL of the article page.
pub fn article_url(slug: &str, options: &SiteOptions) -> String {
    format!("{}/blog/{}", options.base_url, slug)
}

/// Emits the head block for an article page.
///
/// Fixed contents, in order: title and description, keyword tags,
/// OpenGraph preview tags, a JSON-LD `BlogPosting` object, and the
/// `<noscript>` stylesheet fallback that keeps syntax highlighting
/// working when the post-render enhancement step never runs.
pub fn render_head(meta: &PostMeta, slug: &str, options: &SiteOptions) -> String {
    let image = absolute_image_url(meta, options);
    let url = article_url(slug, options);

    let mut out = String::with_capacity(1024);

    out.push_str("<title>");
    html_escape::encode_text_to_string(&meta.title, &mut out);
    out.push_str("</title>");

    out.push_str("<meta name=\"description\" content=\"");
    push_escaped(&mut out, &meta.description);
    out.push_str("\" />");

    if !meta.tags.is_empty() {
        out.push_str("<meta name=\"keywords\" content=\"");
        push_escaped(&mut out, &meta.tags.join(", "));
        out.push_str("\" />");
    }

    for (property, content) in [
        ("og:type", "article"),
        ("og:title", meta.title.as_str()),
        ("og:description", meta.description.as_str()),
        ("og:url", url.as_str()),
        ("og:image", image.as_str()),
    ] {
        out.push_str("<meta property=\"");
        out.push_str(property);
        out.push_str("\" content=\"");
        push_escaped(&mut out, content);
        out.push_str("\" />");
    }

    let structured = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": meta.title,
        "description": meta.description,
        "datePublished": meta.date.to_string(),
        "image": image,
        "url": url,
        "keywords": meta.tags,
    });
    out.push_str("<script type=\"application/ld+json\">");
    out.push_str(&structured.to_string());
    out.push_str("</script>");

    // Non-deferred fallback: applied when the enhancement step cannot
    // run. Carries no data-id so the enhancer's presence check only ever
    // matches the link the enhancer itself inserted.
    out.push_str("<noscript><link rel=\"stylesheet\" href=\"");
    out.push_str(PRISM_THEME_HREF);
    out.push_str("\" /></noscript>");

    out
}
