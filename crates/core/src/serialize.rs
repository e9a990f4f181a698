//! Markup serialization: raw article text into a render-ready document.

use crate::error::{SerializeError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};

/// A serialized, render-ready form of an article's markup.
///
/// Produced once at build time and immutable afterwards. The document is
/// deliberately opaque: consumers walk the tree through [`Document::root`]
/// but never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Returns the root node of the serialized tree.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Parse options for article markup.
///
/// MDX JSX constructs are enabled so articles can embed custom components,
/// GFM constructs are on, and indented code blocks are off — component
/// children are often indented for readability and must stay prose. Raw
/// HTML stays disabled; stray tags become escaped text downstream.
fn parse_options() -> markdown::ParseOptions {
    markdown::ParseOptions {
        constructs: markdown::Constructs {
            code_indented: false,
            html_flow: false,
            html_text: false,
            mdx_jsx_flow: true,
            mdx_jsx_text: true,
            mdx_expression_flow: true,
            mdx_expression_text: true,
            frontmatter: true,
            gfm_autolink_literal: true,
            gfm_strikethrough: true,
            gfm_table: true,
            gfm_task_list_item: true,
            ..markdown::Constructs::default()
        },
        ..markdown::ParseOptions::default()
    }
}

/// Serializes raw markup text into a [`Document`].
///
/// Pure and deterministic: the same input always yields an identical tree.
/// Malformed markup (unclosed JSX elements, invalid embedded expressions)
/// fails with a [`SerializeError`] carrying the source location.
pub fn serialize(input: &str) -> Result<Document, SerializeError> {
    let root = markdown::to_mdast(input, &parse_options()).map_err(|err| SerializeError {
        message: err.reason.clone(),
        location: message_location(&err),
    })?;
    Ok(Document { root })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_plain_prose() {
        let doc = serialize("Hello **world**").unwrap();
        assert!(matches!(doc.root(), Node::Root(_)));
    }

    #[test]
    fn serializing_twice_yields_identical_trees() {
        let input = "## Heading\n\nSome *emphasis* and a [link](https://example.com).\n";
        let first = serialize(input).unwrap();
        let second = serialize(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn accepts_embedded_components() {
        let doc = serialize("<Quote>Stay hungry.</Quote>").unwrap();
        assert!(matches!(doc.root(), Node::Root(_)));
    }

    #[test]
    fn rejects_unclosed_component() {
        let err = serialize("<Quote>\n\nnever closed").unwrap_err();
        assert!(err.location.line >= 1);
    }

    #[test]
    fn rejects_invalid_expression() {
        assert!(serialize("value is {not closed").is_err());
    }
}
