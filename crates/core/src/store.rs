//! Filesystem-backed post store.
//!
//! Posts are markup files (`.md` / `.mdx`) in a flat directory. The slug
//! for each post is derived from the file stem at open time, and the
//! store keeps a sorted slug-to-path index so enumeration and lookup
//! agree by construction: every listed slug resolves, and nothing else
//! does.

use crate::frontmatter::{FrontmatterError, extract_frontmatter};
use crate::slug::slugify;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Metadata record authored in a post's frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    /// Article title.
    pub title: String,
    /// Short description used by head emitters.
    pub description: String,
    /// Publish date.
    pub date: NaiveDate,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image URL, possibly carrying double-slash artifacts.
    pub image_url: String,
}

/// A single post as loaded from the store: read-only source material
/// for one page build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Unique, URL-safe identifier.
    pub slug: String,
    /// Frontmatter metadata.
    pub meta: PostMeta,
    /// Raw markup body, frontmatter stripped.
    pub content: String,
}

/// Errors raised by the post store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested slug is not in the store index.
    #[error("post not found: {slug}")]
    PostNotFound {
        /// The slug that failed to resolve.
        slug: String,
    },
    /// Filesystem access failed.
    #[error("IO error for {path}: {source}")]
    Io {
        /// Path being read when the error occurred.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Frontmatter was missing required fields or malformed.
    #[error("invalid metadata in {path}: {source}")]
    Metadata {
        /// Path of the offending post file.
        path: PathBuf,
        /// Underlying frontmatter error.
        #[source]
        source: FrontmatterError,
    },
}

const MARKUP_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Filesystem-backed lookup from slug to post.
#[derive(Debug)]
pub struct PostStore {
    index: BTreeMap<String, PathBuf>,
}

impl PostStore {
    /// Opens a store over a directory of markup files.
    ///
    /// Scans the directory once, derives a slug from each file stem, and
    /// records the mapping. When two files slugify identically the first
    /// (in directory-entry sort order) wins and the duplicate is skipped
    /// with a warning.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let is_markup = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext));
            if path.is_file() && is_markup {
                paths.push(path);
            }
        }
        paths.sort();

        let mut index = BTreeMap::new();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let slug = slugify(stem);
            if slug.is_empty() {
                log::warn!("skipping {}: file stem yields an empty slug", path.display());
                continue;
            }
            if index.contains_key(&slug) {
                log::warn!(
                    "skipping {}: duplicate slug '{}' already taken",
                    path.display(),
                    slug
                );
                continue;
            }
            index.insert(slug, path);
        }

        Ok(Self { index })
    }

    /// Enumerates every known slug in sorted order.
    ///
    /// This set determines every statically generated page route: a slug
    /// not returned here is unreachable.
    pub fn list_slugs(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Number of posts in the store.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true when the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Fetches a single post by slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<Post, StoreError> {
        let path = self.index.get(slug).ok_or_else(|| StoreError::PostNotFound {
            slug: slug.to_string(),
        })?;

        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let frontmatter = extract_frontmatter(&raw).map_err(|source| StoreError::Metadata {
            path: path.clone(),
            source,
        })?;
        let meta: PostMeta = frontmatter
            .deserialize()
            .map_err(|source| StoreError::Metadata {
                path: path.clone(),
                source,
            })?;

        Ok(Post {
            slug: slug.to_string(),
            meta,
            content: raw[frontmatter.body_start..].to_string(),
        })
    }
}
