//! Shared test utilities for the simple-blog test suite.
//!
//! Provides fixture setup, a quick post writer for ad-hoc content trees, and
//! manifest lookup helpers that panic with a clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let post = find_post(&manifest, "moving-day");
//! assert_eq!(post.title, "Moving Day");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{Manifest, Page, Post};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a minimal valid post at `posts/<rel_path>` under `root`.
///
/// Creates intermediate directories as needed. The body is a single sentence
/// derived from the title.
pub fn write_post(root: &Path, rel_path: &str, title: &str, date: &str) {
    let path = root.join("posts").join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(
        &path,
        format!("+++\ntitle = \"{title}\"\ndate = \"{date}\"\n+++\n\nBody text for {title}.\n"),
    )
    .unwrap();
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a post by slug. Panics if not found.
pub fn find_post<'a>(manifest: &'a Manifest, slug: &str) -> &'a Post {
    manifest
        .posts
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.posts.iter().map(|p| p.slug.as_str()).collect();
            panic!("post '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a page by slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, slug: &str) -> &'a Page {
    manifest
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.pages.iter().map(|p| p.slug.as_str()).collect();
            panic!("page '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All post slugs in manifest order (newest first).
pub fn post_slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.posts.iter().map(|p| p.slug.as_str()).collect()
}

/// All post titles in manifest order (newest first).
pub fn post_titles(manifest: &Manifest) -> Vec<&str> {
    manifest.posts.iter().map(|p| p.title.as_str()).collect()
}
