//! Post-render enhancement: the one-shot step applied after a page's
//! HTML exists in full.
//!
//! Two independent, order-free actions over the rendered page:
//!
//! 1. Compute the reading time from the text that actually made it onto
//!    the page (not the raw markup) and fill the header's reading-time
//!    slot.
//! 2. Ensure the deferred syntax-highlight stylesheet link is present in
//!    `<head>`, inserting it only when absent.
//!
//! Both actions are idempotent: the reading-time slot is overwritten
//! with a freshly computed value every run, and the stylesheet insert is
//! guarded by a presence check, so enhancing an already-enhanced page is
//! a fixpoint.

use inkpost_core::display::read_time;
use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use std::cell::{Cell, RefCell};
use thiserror::Error;

/// Href of the deferred syntax-highlight stylesheet.
pub const PRISM_THEME_HREF: &str = "/prism-theme.css";
/// Marker attribute value identifying the enhancer-inserted link.
pub const PRISM_THEME_DATA_ID: &str = "prism-theme";

/// Errors from the enhancement rewrite.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The HTML rewriter rejected the document.
    #[error("HTML rewrite failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

/// The deferred stylesheet link: fetched at print-media priority, then
/// swapped to all-media once loaded so it never blocks first paint.
fn deferred_stylesheet_link() -> String {
    format!(
        "<link data-id=\"{PRISM_THEME_DATA_ID}\" rel=\"stylesheet\" href=\"{PRISM_THEME_HREF}\" \
         media=\"print\" onload=\"this.media='all'; this.onload=null;\" />"
    )
}

/// Enhances a rendered page.
///
/// Scans once to collect the article body's text content and to check
/// whether the deferred stylesheet is already present, then rewrites
/// once to fill the reading-time slot and (when absent) append the
/// stylesheet link to `<head>`.
pub fn enhance_page(html: &str) -> Result<String, EnhanceError> {
    let body_text = RefCell::new(String::new());
    let theme_present = Cell::new(false);

    let marker_selector = format!("link[data-id=\"{PRISM_THEME_DATA_ID}\"]");

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                text!(".article-body", |chunk| {
                    body_text.borrow_mut().push_str(chunk.as_str());
                    Ok(())
                }),
                element!(&marker_selector, |_el| {
                    theme_present.set(true);
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )?;

    let label = read_time(&body_text.borrow());

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("span[data-read-time]", |el| {
                    // Overwrite, never accumulate.
                    el.set_inner_content(&label, ContentType::Text);
                    Ok(())
                }),
                element!("head", |el| {
                    if !theme_present.get() {
                        el.append(&deferred_stylesheet_link(), ContentType::Html);
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_body(body: &str) -> String {
        format!(
            "<!doctype html><html><head><title>t</title></head><body>\
             <div id=\"content\"><span class=\"article-read-time\" data-read-time></span>\
             <div class=\"article-body\">{body}</div></div></body></html>"
        )
    }

    #[test]
    fn fills_read_time_from_rendered_text() {
        let words = "word ".repeat(600);
        let page = page_with_body(&format!("<p>{words}</p>"));
        let enhanced = enhance_page(&page).unwrap();
        assert!(enhanced.contains("data-read-time>3 min read</span>"));
    }

    #[test]
    fn short_page_floors_at_one_minute() {
        let enhanced = enhance_page(&page_with_body("<p>just a few words</p>")).unwrap();
        assert!(enhanced.contains("data-read-time>1 min read</span>"));
    }

    #[test]
    fn injects_deferred_stylesheet_into_head() {
        let enhanced = enhance_page(&page_with_body("<p>text</p>")).unwrap();
        assert!(enhanced.contains("data-id=\"prism-theme\""));
        assert!(enhanced.contains("media=\"print\""));
        let head_end = enhanced.find("</head>").unwrap();
        let link = enhanced.find("data-id=\"prism-theme\"").unwrap();
        assert!(link < head_end);
    }

    #[test]
    fn enhancing_twice_is_a_fixpoint() {
        let once = enhance_page(&page_with_body("<p>some words here</p>")).unwrap();
        let twice = enhance_page(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.matches("data-id=\"prism-theme\"").count(), 1);
    }

    #[test]
    fn overwrites_a_stale_read_time() {
        let page = page_with_body("<p>fresh words</p>")
            .replace("data-read-time></span>", "data-read-time>99 min read</span>");
        let enhanced = enhance_page(&page).unwrap();
        assert!(enhanced.contains("data-read-time>1 min read</span>"));
        assert!(!enhanced.contains("99 min read"));
    }

    #[test]
    fn existing_stylesheet_is_not_duplicated() {
        let page = page_with_body("<p>text</p>").replace(
            "</head>",
            &format!("{}</head>", deferred_stylesheet_link()),
        );
        let enhanced = enhance_page(&page).unwrap();
        assert_eq!(enhanced.matches("data-id=\"prism-theme\"").count(), 1);
    }
}
