//! Rendering context: output buffer, scope tracking, and escaping.

use super::RenderOptions;
use crate::components::{ComponentMap, Tag};

/// Scope currently being rendered, tracked for structural decisions such
/// as suppressing `<p>` wrappers inside tight lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Scope {
    /// Document root.
    Root,
    /// Inside a `<p>`.
    Paragraph,
    /// Inside a `<ul>` or `<ol>`; `spread` is the CommonMark loose flag.
    List {
        /// Whether the list is loose (items wrapped in paragraphs).
        spread: bool,
    },
}

/// Mutable state threaded through a single document render.
pub struct Context<'a> {
    out: String,
    stack: Vec<Scope>,
    map: &'a ComponentMap,
    options: &'a RenderOptions,
}

impl<'a> Context<'a> {
    /// Creates a fresh context for one document.
    pub fn new(map: &'a ComponentMap, options: &'a RenderOptions) -> Self {
        Self {
            out: String::with_capacity(4096),
            stack: vec![Scope::Root],
            map,
            options,
        }
    }

    /// The tag-to-component map in effect.
    pub fn map(&self) -> &ComponentMap {
        self.map
    }

    /// Rendering options in effect.
    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Writes a raw string without escaping (trusted markup only).
    pub fn push_raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Writes text content with HTML escaping.
    pub fn push_text(&mut self, s: &str) {
        html_escape::encode_text_to_string(s, &mut self.out);
    }

    /// Writes an attribute value with double-quote-safe escaping.
    pub fn push_attr_value(&mut self, s: &str) {
        html_escape::encode_double_quoted_attribute_to_string(s, &mut self.out);
    }

    /// Writes an opening tag, adding the mapped class when one exists.
    ///
    /// An unmapped tag opens unstyled — the silent fallback the map
    /// contract promises.
    pub fn open_tag(&mut self, element: &str, tag: Tag) {
        self.out.push('<');
        self.out.push_str(element);
        if let Some(class) = self.map.class_for(tag) {
            self.out.push_str(" class=\"");
            self.push_attr_value(class);
            self.out.push('"');
        }
        self.out.push('>');
    }

    /// Enters a scope.
    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    /// Leaves the current scope.
    pub fn exit(&mut self) -> Option<Scope> {
        self.stack.pop()
    }

    /// True when the nearest enclosing list is tight, in which case
    /// paragraph wrappers are suppressed.
    pub fn is_in_tight_list(&self) -> bool {
        self.stack
            .iter()
            .rev()
            .find(|scope| matches!(scope, Scope::List { .. }))
            .is_some_and(|scope| matches!(scope, Scope::List { spread: false }))
    }

    /// Consumes the context and returns the rendered HTML.
    pub fn finish(self) -> String {
        self.out
    }
}
