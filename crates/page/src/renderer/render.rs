//! Node rendering: walks the serialized document and emits styled HTML
//! through the tag-to-component map.

use super::context::{Context, Scope};
use crate::components::Tag;
use inkpost_core::display::normalize_image_url;
use markdown::mdast::{AttributeContent, AttributeValue, Node};

/// Extracts plain text from a list of AST nodes.
///
/// Used for code-component bodies, where embedded expressions carry the
/// literal source text.
fn extract_text_from_nodes(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        extract_text_from_node(node, &mut text);
    }
    text
}

fn extract_text_from_node(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(t) => buffer.push_str(&t.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        Node::Code(code) => buffer.push_str(&code.value),
        Node::MdxFlowExpression(expr) => buffer.push_str(trim_template_literal(&expr.value)),
        Node::MdxTextExpression(expr) => buffer.push_str(trim_template_literal(&expr.value)),
        Node::Paragraph(p) => {
            for child in &p.children {
                extract_text_from_node(child, buffer);
            }
        }
        Node::Strong(n) => {
            for child in &n.children {
                extract_text_from_node(child, buffer);
            }
        }
        Node::Emphasis(n) => {
            for child in &n.children {
                extract_text_from_node(child, buffer);
            }
        }
        Node::Link(n) => {
            for child in &n.children {
                extract_text_from_node(child, buffer);
            }
        }
        _ => {}
    }
}

/// Strips the backtick pair from a `{`template literal`}` expression body.
fn trim_template_literal(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('`')
        .and_then(|v| v.strip_suffix('`'))
        .unwrap_or(trimmed)
}

/// Literal attributes of a JSX element, in source order.
///
/// Expression-valued attributes have no build-time value and are dropped
/// with a debug note.
fn literal_attributes(name: &str, attributes: &[AttributeContent]) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    for attr in attributes {
        match attr {
            AttributeContent::Property(prop) => match &prop.value {
                Some(AttributeValue::Literal(value)) => {
                    attrs.push((prop.name.clone(), value.clone()));
                }
                Some(AttributeValue::Expression(_)) => {
                    log::debug!(
                        "dropping expression-valued attribute '{}' on <{}>",
                        prop.name,
                        name
                    );
                }
                None => attrs.push((prop.name.clone(), String::new())),
            },
            AttributeContent::Expression(_) => {
                log::debug!("dropping spread attribute on <{}>", name);
            }
        }
    }
    attrs
}

fn attribute<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn render_paragraph(para: &markdown::mdast::Paragraph, ctx: &mut Context) {
    let in_tight_list = ctx.is_in_tight_list();
    if !in_tight_list {
        ctx.open_tag("p", Tag::Paragraph);
        ctx.enter(Scope::Paragraph);
    }

    for child in &para.children {
        render_node(child, ctx);
    }

    if !in_tight_list {
        ctx.exit();
        ctx.push_raw("</p>");
    }
}

fn render_heading(heading: &markdown::mdast::Heading, ctx: &mut Context) {
    let element = format!("h{}", heading.depth);
    match heading.depth {
        // Only the second and third levels belong to the mapped set;
        // other depths take the unstyled fallback.
        2 => ctx.open_tag(&element, Tag::Heading2),
        3 => ctx.open_tag(&element, Tag::Heading3),
        _ => {
            ctx.push_raw("<");
            ctx.push_raw(&element);
            ctx.push_raw(">");
        }
    }

    for child in &heading.children {
        render_node(child, ctx);
    }

    ctx.push_raw("</");
    ctx.push_raw(&element);
    ctx.push_raw(">");
}

/// Renders an anchor, or only its children when the target is missing.
///
/// A hyperlink without an href degrades to plain content instead of
/// failing the document or emitting a dead anchor.
fn render_anchor(tag: Tag, href: Option<&str>, ctx: &mut Context, children: impl FnOnce(&mut Context)) {
    let Some(href) = href.filter(|href| !href.is_empty()) else {
        children(ctx);
        return;
    };

    ctx.push_raw("<a");
    if let Some(class) = ctx.map().class_for(tag) {
        let class = class.to_string();
        ctx.push_raw(" class=\"");
        ctx.push_attr_value(&class);
        ctx.push_raw("\"");
    }
    ctx.push_raw(" href=\"");
    ctx.push_attr_value(href);
    ctx.push_raw("\">");
    children(ctx);
    ctx.push_raw("</a>");
}

fn render_link(link: &markdown::mdast::Link, ctx: &mut Context) {
    render_anchor(Tag::Hyperlink, Some(link.url.as_str()), ctx, |ctx| {
        for child in &link.children {
            render_node(child, ctx);
        }
    });
}

fn render_image(img: &markdown::mdast::Image, ctx: &mut Context) {
    let src = normalize_image_url(&img.url);
    ctx.push_raw("<img");
    if let Some(class) = ctx.map().class_for(Tag::Image) {
        let class = class.to_string();
        ctx.push_raw(" class=\"");
        ctx.push_attr_value(&class);
        ctx.push_raw("\"");
    }
    ctx.push_raw(" src=\"");
    ctx.push_attr_value(&src);
    ctx.push_raw("\" alt=\"");
    ctx.push_attr_value(&img.alt);
    ctx.push_raw("\"");
    if ctx.options().lazy_images {
        ctx.push_raw(" loading=\"lazy\"");
    }
    ctx.push_raw(" />");
}

fn render_code_block(code: &str, lang: Option<&str>, ctx: &mut Context) {
    ctx.open_tag("pre", Tag::CodeBlock);
    match lang.filter(|lang| !lang.is_empty()) {
        Some(lang) => {
            // The language-* class is what the deferred syntax-highlight
            // stylesheet keys on.
            ctx.push_raw("<code class=\"language-");
            ctx.push_attr_value(lang);
            ctx.push_raw("\">");
        }
        None => ctx.push_raw("<code>"),
    }
    ctx.push_text(code);
    ctx.push_raw("</code></pre>");
}

fn render_list(list: &markdown::mdast::List, ctx: &mut Context) {
    let element = if list.ordered { "ol" } else { "ul" };
    ctx.push_raw("<");
    ctx.push_raw(element);
    ctx.push_raw(">");
    ctx.enter(Scope::List {
        spread: list.spread,
    });

    for child in &list.children {
        render_node(child, ctx);
    }

    ctx.exit();
    ctx.push_raw("</");
    ctx.push_raw(element);
    ctx.push_raw(">");
}

fn render_list_item(item: &markdown::mdast::ListItem, ctx: &mut Context) {
    ctx.push_raw("<li>");
    if let Some(checked) = item.checked {
        if checked {
            ctx.push_raw("<input type=\"checkbox\" disabled checked /> ");
        } else {
            ctx.push_raw("<input type=\"checkbox\" disabled /> ");
        }
    }
    for child in &item.children {
        render_node(child, ctx);
    }
    ctx.push_raw("</li>");
}

fn render_table(table: &markdown::mdast::Table, ctx: &mut Context) {
    ctx.push_raw("<table>");

    ctx.push_raw("<thead>");
    if let Some(Node::TableRow(row)) = table.children.first() {
        render_table_row(row, ctx, true, &table.align);
    }
    ctx.push_raw("</thead>");

    if table.children.len() > 1 {
        ctx.push_raw("<tbody>");
        for row in table.children.iter().skip(1) {
            if let Node::TableRow(row) = row {
                render_table_row(row, ctx, false, &table.align);
            }
        }
        ctx.push_raw("</tbody>");
    }

    ctx.push_raw("</table>");
}

fn render_table_row(
    row: &markdown::mdast::TableRow,
    ctx: &mut Context,
    is_header: bool,
    aligns: &[markdown::mdast::AlignKind],
) {
    ctx.push_raw("<tr>");
    for (i, cell) in row.children.iter().enumerate() {
        if let Node::TableCell(cell) = cell {
            let element = if is_header { "th" } else { "td" };
            let align = match aligns.get(i) {
                Some(markdown::mdast::AlignKind::Left) => " align=\"left\"",
                Some(markdown::mdast::AlignKind::Right) => " align=\"right\"",
                Some(markdown::mdast::AlignKind::Center) => " align=\"center\"",
                _ => "",
            };
            ctx.push_raw("<");
            ctx.push_raw(element);
            ctx.push_raw(align);
            ctx.push_raw(">");
            for child in &cell.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</");
            ctx.push_raw(element);
            ctx.push_raw(">");
        }
    }
    ctx.push_raw("</tr>");
}

fn render_html(html: &markdown::mdast::Html, ctx: &mut Context) {
    // The serializer keeps raw-HTML constructs off, so this node only
    // shows up for markup the JSX parser refused; escape it as text.
    log::debug!("raw HTML in markup will be escaped: {}", html.value);
    ctx.push_text(&html.value);
}

/// Renders an embedded component (MDX JSX element).
///
/// Names inside the closed tag set get their styled renderer; anything
/// else passes through as a plain unstyled element with its literal
/// attributes, which is the map's deliberate degradation policy.
fn render_component(
    name: Option<&str>,
    attributes: &[AttributeContent],
    children: &[Node],
    ctx: &mut Context,
) {
    // Fragment: <>...</> has no name, render children transparently.
    let Some(name) = name else {
        for child in children {
            render_node(child, ctx);
        }
        return;
    };

    let attrs = literal_attributes(name, attributes);

    match Tag::from_name(name) {
        Some(tag @ (Tag::Link | Tag::Hyperlink)) => {
            render_anchor(tag, attribute(&attrs, "href"), ctx, |ctx| {
                for child in children {
                    render_node(child, ctx);
                }
            });
        }
        Some(Tag::Quote) => {
            ctx.open_tag("blockquote", Tag::Quote);
            for child in children {
                render_node(child, ctx);
            }
            ctx.push_raw("</blockquote>");
        }
        Some(Tag::ArticleImage) => {
            let Some(src) = attribute(&attrs, "src").filter(|src| !src.is_empty()) else {
                // No source to show; degrade to whatever children exist.
                log::debug!("<{name}> without src, rendering children only");
                for child in children {
                    render_node(child, ctx);
                }
                return;
            };
            let src = normalize_image_url(src);
            ctx.open_tag("figure", Tag::ArticleImage);
            ctx.push_raw("<img src=\"");
            ctx.push_attr_value(&src);
            ctx.push_raw("\" alt=\"");
            ctx.push_attr_value(attribute(&attrs, "alt").unwrap_or_default());
            ctx.push_raw("\"");
            if ctx.options().lazy_images {
                ctx.push_raw(" loading=\"lazy\"");
            }
            ctx.push_raw(" /></figure>");
        }
        Some(Tag::CodeBlock) => {
            let code = extract_text_from_nodes(children);
            render_code_block(&code, attribute(&attrs, "language"), ctx);
        }
        Some(Tag::Image) => {
            let src = normalize_image_url(attribute(&attrs, "src").unwrap_or_default());
            ctx.push_raw("<img");
            if let Some(class) = ctx.map().class_for(Tag::Image) {
                let class = class.to_string();
                ctx.push_raw(" class=\"");
                ctx.push_attr_value(&class);
                ctx.push_raw("\"");
            }
            ctx.push_raw(" src=\"");
            ctx.push_attr_value(&src);
            ctx.push_raw("\" alt=\"");
            ctx.push_attr_value(attribute(&attrs, "alt").unwrap_or_default());
            ctx.push_raw("\" />");
        }
        Some(tag @ (Tag::Heading2 | Tag::Heading3 | Tag::Paragraph | Tag::InlineCode)) => {
            // Plain element names written as JSX (<h2>, <p>, <code>).
            ctx.open_tag(tag.name(), tag);
            for child in children {
                render_node(child, ctx);
            }
            ctx.push_raw("</");
            ctx.push_raw(tag.name());
            ctx.push_raw(">");
        }
        Some(Tag::LineBreak) => {
            ctx.push_raw("<br />");
        }
        None => {
            log::debug!("unmapped component <{name}>, rendering unstyled");
            ctx.push_raw("<");
            ctx.push_raw(name);
            for (key, value) in &attrs {
                ctx.push_raw(" ");
                ctx.push_raw(key);
                ctx.push_raw("=\"");
                ctx.push_attr_value(value);
                ctx.push_raw("\"");
            }
            ctx.push_raw(">");
            for child in children {
                render_node(child, ctx);
            }
            ctx.push_raw("</");
            ctx.push_raw(name);
            ctx.push_raw(">");
        }
    }
}

/// Recursively renders an AST node, updating the context state.
pub fn render_node(node: &Node, ctx: &mut Context) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                render_node(child, ctx);
            }
        }
        Node::Text(text) => ctx.push_text(&text.value),
        Node::Paragraph(para) => render_paragraph(para, ctx),
        Node::Heading(heading) => render_heading(heading, ctx),
        Node::Break(_) => {
            // Hard line break; the styled <br> carries spacing.
            match ctx.map().class_for(Tag::LineBreak) {
                Some(class) => {
                    let class = class.to_string();
                    ctx.push_raw("<br class=\"");
                    ctx.push_attr_value(&class);
                    ctx.push_raw("\" />");
                }
                None => ctx.push_raw("<br />"),
            }
        }
        Node::InlineCode(code) => {
            ctx.open_tag("code", Tag::InlineCode);
            ctx.push_text(&code.value);
            ctx.push_raw("</code>");
        }
        Node::Link(link) => render_link(link, ctx),
        Node::Image(img) => render_image(img, ctx),
        Node::Code(code) => render_code_block(&code.value, code.lang.as_deref(), ctx),
        Node::Strong(strong) => {
            ctx.push_raw("<strong>");
            for child in &strong.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</strong>");
        }
        Node::Emphasis(emphasis) => {
            ctx.push_raw("<em>");
            for child in &emphasis.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</em>");
        }
        Node::Delete(delete) => {
            ctx.push_raw("<del>");
            for child in &delete.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</del>");
        }
        Node::Blockquote(quote) => {
            ctx.push_raw("<blockquote>");
            for child in &quote.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</blockquote>");
        }
        Node::List(list) => render_list(list, ctx),
        Node::ListItem(item) => render_list_item(item, ctx),
        Node::ThematicBreak(_) => ctx.push_raw("<hr />"),
        Node::Table(table) => render_table(table, ctx),
        Node::TableRow(_) | Node::TableCell(_) => {}
        Node::Html(html) => render_html(html, ctx),
        Node::MdxJsxFlowElement(elem) => {
            render_component(elem.name.as_deref(), &elem.attributes, &elem.children, ctx);
        }
        Node::MdxJsxTextElement(elem) => {
            render_component(elem.name.as_deref(), &elem.attributes, &elem.children, ctx);
        }
        Node::MdxFlowExpression(expr) => {
            // Expressions have no build-time evaluation; drop with a note.
            log::debug!("dropping embedded expression: {{{}}}", expr.value);
        }
        Node::MdxTextExpression(expr) => {
            log::debug!("dropping embedded expression: {{{}}}", expr.value);
        }
        Node::Yaml(_) | Node::Toml(_) => {}
        _ => {
            log::warn!("unhandled markup node type: {:?}", node);
        }
    }
}
