//! Presentational widgets mounted by the page assembler: the share
//! widget and the article header.

use crate::head::article_url;
use crate::page::SiteOptions;

fn push_text(out: &mut String, text: &str) {
    html_escape::encode_text_to_string(text, out);
}

fn push_attr(out: &mut String, value: &str) {
    html_escape::encode_double_quoted_attribute_to_string(value, out);
}

/// Emits the share widget for an article.
pub fn render_share_widget(title: &str, slug: &str, options: &SiteOptions) -> String {
    let url = article_url(slug, options);
    let mut out = String::with_capacity(256);
    out.push_str("<aside class=\"share-widget\"><span class=\"share-widget__label\">Share:</span>");
    out.push_str(
        "<a class=\"share-widget__link\" target=\"_blank\" rel=\"noreferrer\" \
         href=\"https://twitter.com/intent/tweet?text=",
    );
    push_attr(&mut out, title);
    out.push_str("&url=");
    push_attr(&mut out, &url);
    out.push_str("\">Twitter</a>");
    out.push_str(
        "<a class=\"share-widget__link\" target=\"_blank\" rel=\"noreferrer\" \
         href=\"https://www.linkedin.com/sharing/share-offsite/?url=",
    );
    push_attr(&mut out, &url);
    out.push_str("\">LinkedIn</a></aside>");
    out
}

/// Emits the article header: title, formatted date, cover image, and the
/// reading-time slot.
///
/// The reading-time slot is intentionally empty at render time; the
/// post-render enhancement step fills it from the text that actually
/// made it onto the page.
pub fn render_article_header(
    title: &str,
    formatted_date: &str,
    image_url: &str,
    read_time: &str,
) -> String {
    let mut out = String::with_capacity(512);
    out.push_str("<header class=\"article-header\"><h1 class=\"article-title\">");
    push_text(&mut out, title);
    out.push_str("</h1><div class=\"article-details\"><time class=\"article-date\">");
    push_text(&mut out, formatted_date);
    out.push_str("</time><span class=\"article-read-time\" data-read-time>");
    push_text(&mut out, read_time);
    out.push_str("</span></div><img class=\"article-cover\" src=\"");
    push_attr(&mut out, image_url);
    out.push_str("\" alt=\"\" /></header>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_widget_links_to_the_article() {
        let options = SiteOptions {
            base_url: "https://example.com".to_string(),
            ..SiteOptions::default()
        };
        let widget = render_share_widget("My Post", "my-post", &options);
        assert!(widget.contains("share-widget"));
        assert!(widget.contains("https://example.com/blog/my-post"));
    }

    #[test]
    fn header_has_empty_read_time_slot_before_enhancement() {
        let header = render_article_header("Title", "March 15, 2022", "/images/cover.png", "");
        assert!(header.contains("<span class=\"article-read-time\" data-read-time></span>"));
        assert!(header.contains("March 15, 2022"));
        assert!(header.contains("/images/cover.png"));
    }
}
