#![deny(missing_docs)]
//! Inkpost page engine: component mapping, document rendering, page assembly,
//! and the one-shot post-render enhancement step.

/// Tag-to-component mapping.
pub mod components;
/// Post-render enhancement (reading time, deferred stylesheet).
pub mod enhance;
/// Page head emitters (metadata, OpenGraph, structured data).
pub mod head;
/// Page assembly: build phase and render phase.
pub mod page;
/// Rendering layer (mdast-based HTML renderer).
pub mod renderer;
/// Presentational widgets (share widget, article header).
pub mod widgets;

pub use components::{ComponentMap, ComponentStyle, DEFAULT_COMPONENTS, Tag};
pub use enhance::{EnhanceError, enhance_page};
pub use page::{BuildFailure, PageError, PageProps, SiteBuild, SiteOptions, build_page, build_site, render_page};
pub use renderer::{RenderOptions, render_document};
