//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Scans the content directory for posts and
//! pages, producing a structured manifest that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Static assets → copied to output root
//! ├── 040-about.md                 # Page (numbered = appears in nav)
//! ├── 050-github.md                # External link page (URL-only content)
//! └── posts/
//!     ├── moving-day.md            # Post (front matter + markdown)
//!     ├── wip-thoughts.md          # draft = true → skipped
//!     └── 2022/
//!         └── one-year-later.md    # Subdirectories are fine
//! ```
//!
//! ## Posts
//!
//! Every `.md` file under `posts/` is a post. The filename stem is the URL
//! slug, so slugs must be unique across the whole tree. Front matter supplies
//! title, date, optional description, and tags; posts are sorted newest-first
//! (ties break on slug so output is deterministic). Drafts are skipped.
//!
//! ## Pages
//!
//! Markdown files in the content root follow the `NNN-name.md` convention:
//! numbered files appear in the header nav sorted by number, unnumbered files
//! are generated but hidden. A file whose only content is a URL becomes an
//! external link in the nav.
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - Every post parses: front matter fences present, TOML valid, date valid
//! - No duplicate post slugs

use crate::config;
use crate::frontmatter::{self, FrontMatterError};
use crate::naming::parse_entry_name;
use crate::types::{Manifest, Page, Post};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Front matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
    #[error("Duplicate post slug '{slug}': {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Subdirectory of the content root holding posts.
pub const POSTS_DIR: &str = "posts";

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    let posts = scan_posts(root)?;
    let pages = parse_pages(root)?;

    Ok(Manifest {
        posts,
        pages,
        config,
    })
}

/// Scan `posts/` recursively for markdown posts.
///
/// Returns posts sorted newest-first; date ties break on slug. A missing
/// `posts/` directory is an empty blog, not an error.
fn scan_posts(root: &Path) -> Result<Vec<Post>, ScanError> {
    let posts_dir = root.join(POSTS_DIR);
    if !posts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    let mut seen_slugs: HashMap<String, PathBuf> = HashMap::new();

    for entry in WalkDir::new(&posts_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown(path) || is_hidden(path) {
            continue;
        }

        let content = fs::read_to_string(path)?;
        let (matter, body) =
            frontmatter::parse(&content).map_err(|source| ScanError::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?;

        if matter.draft {
            continue;
        }

        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        if let Some(first) = seen_slugs.insert(slug.clone(), path.to_path_buf()) {
            return Err(ScanError::DuplicateSlug {
                slug,
                first,
                second: path.to_path_buf(),
            });
        }

        let source_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        posts.push(Post {
            slug,
            title: matter.title,
            date: matter.date,
            description: matter.description,
            tags: matter.tags,
            body,
            source_path,
        });
    }

    // Newest first; slug breaks date ties so rebuilds are deterministic
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

    Ok(posts)
}

/// Parse all markdown files in the content root into pages.
///
/// Each `.md` file becomes a page. Numbered files (`NNN-name.md`) appear in
/// navigation sorted by number; unnumbered files are generated but hidden.
/// If a file's only content is a URL, it becomes an external link in the nav.
fn parse_pages(root: &Path) -> Result<Vec<Page>, ScanError> {
    let mut md_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_markdown(p) && !is_hidden(p))
        .collect();

    md_files.sort();

    let mut pages = Vec::new();
    for md_path in &md_files {
        let stem = md_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let parsed = parse_entry_name(&stem);
        let (in_nav, sort_key, name) = match parsed.number {
            Some(num) if !parsed.name.is_empty() => (true, num, parsed.name),
            _ => (false, u32::MAX, stem.clone()),
        };

        let link_title = name.replace('-', " ");
        let slug = name;

        let content = fs::read_to_string(md_path)?;
        let trimmed = content.trim();

        // A page whose only content is a URL becomes an external link
        let is_link = !trimmed.contains('\n')
            && (trimmed.starts_with("http://") || trimmed.starts_with("https://"));

        let title = if is_link {
            link_title.clone()
        } else {
            content
                .lines()
                .find(|line| line.starts_with("# "))
                .map(|line| line.trim_start_matches("# ").trim().to_string())
                .unwrap_or_else(|| link_title.clone())
        };

        pages.push(Page {
            title,
            link_title,
            slug,
            body: content,
            in_nav,
            sort_key,
            is_link,
        });
    }

    pages.sort_by_key(|p| p.sort_key);
    Ok(pages)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
