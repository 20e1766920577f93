//! Output artifact naming.
//!
//! Thumbnails land at a deterministic path derived from the post's slug, so
//! re-running the generator overwrites the previous image instead of piling
//! up variants.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::document::FrontMatter;

/// Directory, relative to the site root, where thumbnails are written.
pub const OUTPUT_DIR: &str = "static/img/blog";
/// URL prefix recorded in the post's front matter.
pub const SITE_PREFIX: &str = "/img/blog";

const SUFFIX: &str = "-thumbnail.png";

/// Date prefix Docusaurus allows in post filenames (`YYYY-MM-DD-`).
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-").expect("valid regex"));

/// Derives the slug for a post.
///
/// The front-matter `slug` field wins when present and non-empty; otherwise
/// the source filename is used with its extension stripped and any leading
/// date prefix removed.
#[must_use]
pub fn derive_slug(front_matter: &FrontMatter, post_path: &Path) -> String {
    if let Some(slug) = front_matter.scalar("slug") {
        if !slug.is_empty() {
            return slug.to_string();
        }
    }

    let stem = post_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    DATE_PREFIX.replace(stem, "").into_owned()
}

/// Filesystem path the thumbnail is written to.
#[must_use]
pub fn thumbnail_path(slug: &str) -> PathBuf {
    PathBuf::from(OUTPUT_DIR).join(format!("{slug}{SUFFIX}"))
}

/// Site-absolute path recorded in the post's `image` field.
#[must_use]
pub fn site_image_path(slug: &str) -> String {
    format!("{SITE_PREFIX}/{slug}{SUFFIX}")
}
