//! Page assembly.
//!
//! Two phases, mirroring the life of a statically generated article page:
//! a build phase that turns a slug into a self-contained props bundle,
//! and a render phase that lays the bundle out in a fixed visual order.
//! A site-wide fan-out builds every enumerated slug, isolating failures
//! to the page that caused them.

use crate::components::ComponentMap;
use crate::head::render_head;
use crate::renderer::{RenderOptions, render_document};
use crate::widgets::{render_article_header, render_share_widget};
use inkpost_core::display::{format_date, normalize_image_url};
use inkpost_core::error::SerializeError;
use inkpost_core::serialize::{Document, serialize};
use inkpost_core::store::{PostMeta, PostStore, StoreError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that fail a single page's build.
///
/// Fatal for that page only; sibling pages build independently.
#[derive(Debug, Error)]
pub enum PageError {
    /// The slug did not resolve, or the post could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The post's markup was malformed.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Site-wide assembly options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOptions {
    /// Absolute origin the site is served from, no trailing slash.
    #[serde(default)]
    pub base_url: String,
    /// Document renderer options.
    #[serde(default)]
    pub render: RenderOptions,
}

/// Everything the render phase needs for one page, bundled at build time.
///
/// Immutable once built and owned by the page it belongs to.
#[derive(Debug, Clone)]
pub struct PageProps {
    /// The article's slug.
    pub slug: String,
    /// Serialized, render-ready document.
    pub document: Document,
    /// Frontmatter metadata.
    pub meta: PostMeta,
}

/// Build phase: resolve a slug into a [`PageProps`] bundle.
///
/// Fetches the post, serializes its markup, and bundles the result.
/// Either step failing is terminal for this page.
pub fn build_page(store: &PostStore, slug: &str) -> Result<PageProps, PageError> {
    let post = store.get_by_slug(slug)?;
    let document = serialize(&post.content)?;
    Ok(PageProps {
        slug: post.slug,
        document,
        meta: post.meta,
    })
}

/// Render phase: lay out a built page in its fixed visual order.
///
/// Head block, then inside the content container: share widget, article
/// header (title, formatted date, cover image, empty reading-time slot),
/// and the rendered document body. Deterministic for a given props
/// bundle, map, and options.
pub fn render_page(props: &PageProps, map: &ComponentMap, options: &SiteOptions) -> String {
    let head = render_head(&props.meta, &props.slug, options);
    let share = render_share_widget(&props.meta.title, &props.slug, options);
    let header = render_article_header(
        &props.meta.title,
        &format_date(props.meta.date),
        &normalize_image_url(&props.meta.image_url),
        "",
    );
    let body = render_document(&props.document, map, &options.render);

    let mut out = String::with_capacity(head.len() + share.len() + header.len() + body.len() + 256);
    out.push_str("<!doctype html><html lang=\"en\"><head>");
    out.push_str(&head);
    out.push_str("</head><body><div id=\"content\" class=\"article-container\">");
    out.push_str(&share);
    out.push_str(&header);
    out.push_str("<div class=\"article-body\">");
    out.push_str(&body);
    out.push_str("</div></div></body></html>");
    out
}

/// A page that built and rendered successfully.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    /// The page's slug, which is also its route.
    pub slug: String,
    /// Rendered page HTML, before enhancement.
    pub html: String,
}

/// A page whose build failed.
#[derive(Debug)]
pub struct BuildFailure {
    /// Slug of the page that failed.
    pub slug: String,
    /// What went wrong.
    pub error: PageError,
}

/// Outcome of building every enumerated page.
#[derive(Debug, Default)]
pub struct SiteBuild {
    /// Pages that rendered, in slug order.
    pub pages: Vec<BuiltPage>,
    /// Pages that failed, in slug order.
    pub failures: Vec<BuildFailure>,
}

/// Builds and renders a page for every slug the store enumerates.
///
/// Pages are independent, so the fan-out runs in parallel. One page
/// failing is recorded and never aborts its siblings.
pub fn build_site(store: &PostStore, map: &ComponentMap, options: &SiteOptions) -> SiteBuild {
    let slugs: Vec<&str> = store.list_slugs().collect();

    let results: Vec<(String, Result<String, PageError>)> = slugs
        .par_iter()
        .map(|slug| {
            let rendered =
                build_page(store, slug).map(|props| render_page(&props, map, options));
            (slug.to_string(), rendered)
        })
        .collect();

    let mut build = SiteBuild::default();
    for (slug, result) in results {
        match result {
            Ok(html) => build.pages.push(BuiltPage { slug, html }),
            Err(error) => {
                log::warn!("page build failed for '{slug}': {error}");
                build.failures.push(BuildFailure { slug, error });
            }
        }
    }
    build
}
