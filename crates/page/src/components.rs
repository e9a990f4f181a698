//! The tag-to-component map: a closed set of markup tags, each paired with
//! the styling class of its presentational renderer.
//!
//! Names outside the closed set are not an error — they fall back to the
//! default unstyled rendering, a deliberate silent-degradation policy.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of markup tags subject to styled rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    /// `##` heading.
    Heading2,
    /// `###` heading.
    Heading3,
    /// Prose paragraph.
    Paragraph,
    /// Hard line break.
    LineBreak,
    /// Inline `code` span.
    InlineCode,
    /// Markdown hyperlink or raw `<a>`.
    Hyperlink,
    /// Markdown image.
    Image,
    /// Embedded `<Link>` component.
    Link,
    /// Fenced code block or embedded `<Code>` component.
    CodeBlock,
    /// Embedded `<Quote>` component.
    Quote,
    /// Embedded `<ArticleImage>` component.
    ArticleImage,
}

impl Tag {
    /// Every tag in the closed set, for exhaustiveness checks.
    pub const ALL: [Tag; 11] = [
        Tag::Heading2,
        Tag::Heading3,
        Tag::Paragraph,
        Tag::LineBreak,
        Tag::InlineCode,
        Tag::Hyperlink,
        Tag::Image,
        Tag::Link,
        Tag::CodeBlock,
        Tag::Quote,
        Tag::ArticleImage,
    ];

    /// Resolves a markup element or component name to a tag.
    ///
    /// Accepts the plain element names that markdown constructs produce
    /// (`h2`, `p`, `a`, …) as well as the embedded component names
    /// (`Quote`, `ArticleImage`, …). Returns `None` for anything outside
    /// the closed set; callers then apply the unstyled fallback.
    pub fn from_name(name: &str) -> Option<Tag> {
        match name {
            "h2" => Some(Tag::Heading2),
            "h3" => Some(Tag::Heading3),
            "p" => Some(Tag::Paragraph),
            "br" => Some(Tag::LineBreak),
            "code" => Some(Tag::InlineCode),
            "a" => Some(Tag::Hyperlink),
            "img" => Some(Tag::Image),
            "Link" => Some(Tag::Link),
            "Code" => Some(Tag::CodeBlock),
            "Quote" => Some(Tag::Quote),
            "Image" | "ArticleImage" => Some(Tag::ArticleImage),
            _ => None,
        }
    }

    /// Canonical name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Heading2 => "h2",
            Tag::Heading3 => "h3",
            Tag::Paragraph => "p",
            Tag::LineBreak => "br",
            Tag::InlineCode => "code",
            Tag::Hyperlink => "a",
            Tag::Image => "img",
            Tag::Link => "Link",
            Tag::CodeBlock => "Code",
            Tag::Quote => "Quote",
            Tag::ArticleImage => "ArticleImage",
        }
    }
}

/// Styling applied by a tag's presentational renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStyle {
    /// CSS class emitted on the rendered element.
    pub class: String,
}

impl ComponentStyle {
    /// Creates a style with the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

/// Mapping from [`Tag`] to its presentational style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentMap {
    entries: HashMap<Tag, ComponentStyle>,
}

impl ComponentMap {
    /// Creates an empty map. Every render through an empty map takes the
    /// unstyled fallback path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the style for a tag.
    pub fn insert(&mut self, tag: Tag, style: ComponentStyle) {
        self.entries.insert(tag, style);
    }

    /// Looks up the style for a tag.
    pub fn style(&self, tag: Tag) -> Option<&ComponentStyle> {
        self.entries.get(&tag)
    }

    /// Class attribute value for a tag, when mapped.
    pub fn class_for(&self, tag: Tag) -> Option<&str> {
        self.entries.get(&tag).map(|style| style.class.as_str())
    }

    /// Returns true when every tag in [`Tag::ALL`] has an entry.
    ///
    /// Startup-time replacement for what would otherwise be a silent
    /// runtime gap: content referencing an unmapped tag renders unstyled.
    pub fn is_total(&self) -> bool {
        Tag::ALL.iter().all(|tag| self.entries.contains_key(tag))
    }
}

/// The article styling map used by the blog pages.
pub static DEFAULT_COMPONENTS: Lazy<ComponentMap> = Lazy::new(|| {
    let mut map = ComponentMap::new();
    map.insert(Tag::Heading2, ComponentStyle::new("article-heading-second"));
    map.insert(Tag::Heading3, ComponentStyle::new("article-heading-third"));
    map.insert(Tag::Paragraph, ComponentStyle::new("article-paragraph"));
    map.insert(Tag::LineBreak, ComponentStyle::new("article-break"));
    map.insert(Tag::InlineCode, ComponentStyle::new("article-highlight"));
    map.insert(Tag::Hyperlink, ComponentStyle::new("article-anchor"));
    map.insert(Tag::Image, ComponentStyle::new("article-inline-image"));
    map.insert(Tag::Link, ComponentStyle::new("article-link"));
    map.insert(Tag::CodeBlock, ComponentStyle::new("article-code"));
    map.insert(Tag::Quote, ComponentStyle::new("article-quote"));
    map.insert(Tag::ArticleImage, ComponentStyle::new("article-image"));
    map
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_is_total() {
        assert!(DEFAULT_COMPONENTS.is_total());
    }

    #[test]
    fn resolves_element_and_component_names() {
        assert_eq!(Tag::from_name("h2"), Some(Tag::Heading2));
        assert_eq!(Tag::from_name("a"), Some(Tag::Hyperlink));
        assert_eq!(Tag::from_name("Quote"), Some(Tag::Quote));
        assert_eq!(Tag::from_name("img"), Some(Tag::Image));
        assert_eq!(Tag::from_name("Image"), Some(Tag::ArticleImage));
        assert_eq!(Tag::from_name("ArticleImage"), Some(Tag::ArticleImage));
    }

    #[test]
    fn unknown_names_are_unmapped() {
        assert_eq!(Tag::from_name("marquee"), None);
        assert_eq!(Tag::from_name("CalendlyEmbed"), None);
        assert_eq!(Tag::from_name(""), None);
    }

    #[test]
    fn partial_map_is_not_total() {
        let mut map = ComponentMap::new();
        map.insert(Tag::Paragraph, ComponentStyle::new("p"));
        assert!(!map.is_total());
        assert_eq!(map.class_for(Tag::Paragraph), Some("p"));
        assert_eq!(map.class_for(Tag::Quote), None);
    }
}
