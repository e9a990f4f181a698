#![deny(missing_docs)]
//! Inkpost core: post storage, markup serialization, and derived display metadata.

/// Derived display metadata (dates, reading time, image URLs).
pub mod display;
/// Core error and source-location types.
pub mod error;
/// YAML frontmatter extraction helpers.
pub mod frontmatter;
/// Markup serialization into render-ready documents.
pub mod serialize;
/// Slug generation utilities.
pub mod slug;
/// Filesystem-backed post store.
pub mod store;

pub use display::{format_date, normalize_image_url, read_time};
pub use error::{SerializeError, SourceLocation};
pub use frontmatter::{Frontmatter, FrontmatterError, extract_frontmatter};
pub use serialize::{Document, serialize};
pub use slug::{Slugger, slugify};
pub use store::{Post, PostMeta, PostStore, StoreError};
