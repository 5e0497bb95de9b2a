//! Shared types serialized between pipeline stages.
//!
//! The scan stage writes these to `manifest.json` and the generate stage
//! reads them back, so everything here derives both `Serialize` and
//! `Deserialize` and must stay stable across the two modules.

use crate::config::SiteConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Manifest output from the scan stage, input to the generate stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Posts sorted newest-first.
    pub posts: Vec<Post>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    pub config: SiteConfig,
}

/// A blog post parsed from `posts/**/*.md`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL slug from the filename stem (`moving-day.md` → `moving-day/`).
    pub slug: String,
    /// Title from front matter.
    pub title: String,
    /// Publication date from front matter. Ordering key, newest first.
    pub date: NaiveDate,
    /// Optional front matter summary; templates fall back to an excerpt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags from front matter, possibly empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Raw Markdown body (front matter stripped).
    pub body: String,
    /// Source path relative to the content root, for display and errors.
    pub source_path: String,
}

impl Post {
    /// Date formatted the way it appears on the site: "July 04, 2021".
    pub fn display_date(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }
}

/// A page generated from a markdown file in the content root.
///
/// Pages follow the `NNN-name.md` numbering convention:
/// - Numbered files appear in the header nav, sorted by number
/// - Unnumbered files are generated but hidden from navigation
///
/// If the file content is just a URL, the page becomes an external link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Title from first `# heading` in markdown, or link_title as fallback.
    pub title: String,
    /// Display label in nav (filename with number stripped, dashes → spaces).
    pub link_title: String,
    /// URL slug (filename stem with number prefix stripped).
    pub slug: String,
    /// Raw markdown content (or URL for link pages).
    pub body: String,
    /// Whether this page appears in navigation (has number prefix).
    pub in_nav: bool,
    /// Sort key from number prefix (for ordering).
    pub sort_key: u32,
    /// If true, body is a URL and this page is an external link.
    pub is_link: bool,
}
