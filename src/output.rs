//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (post, tag, page) is its semantic identity — title and
//! positional index — with filesystem paths shown as secondary context via
//! indented `Source:` lines. This makes the output readable as a content
//! inventory while still letting users trace data back to specific files.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Posts
//! 001 Moving Day (July 04, 2021)
//!     Source: posts/moving-day.md
//!     Tags: life, travel
//!     First impressions of the city
//!
//! Pages
//! 001 about
//!     Source: 040-about.md
//! 002 github (link)
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Posts
//! 001 Moving Day → moving-day/index.html
//! Tags
//! 001 life (2 posts) → tags/life/index.html
//! Pages
//! 001 about → about.html
//! Feed → rss.xml
//! Generated 4 post pages, 3 tag pages, 1 page
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::naming::slugify;
use crate::types::Manifest;
use std::collections::BTreeMap;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Tag slugs with display names and post counts, sorted by slug.
fn tag_counts(manifest: &Manifest) -> BTreeMap<String, (String, usize)> {
    let mut tags: BTreeMap<String, (String, usize)> = BTreeMap::new();
    for post in &manifest.posts {
        for tag in &post.tags {
            let slug = slugify(tag);
            if slug.is_empty() {
                continue;
            }
            tags.entry(slug)
                .or_insert_with(|| (tag.clone(), 0))
                .1 += 1;
        }
    }
    tags
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered blog structure.
///
/// Information-first: each entity leads with its positional index and title.
/// Source paths, tags, and description previews are indented context lines.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Posts".to_string());
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            post.title,
            post.display_date()
        ));
        lines.push(format!("    Source: {}", post.source_path));
        if !post.tags.is_empty() {
            lines.push(format!("    Tags: {}", post.tags.join(", ")));
        }
        if let Some(ref desc) = post.description {
            let truncated = truncate_desc(desc.trim(), 60);
            if !truncated.is_empty() {
                lines.push(format!("    {}", truncated));
            }
        }
    }

    if !manifest.pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            let link_marker = if page.is_link { " (link)" } else { "" };
            lines.push(format!(
                "{} {}{}",
                format_index(i + 1),
                page.link_title,
                link_marker
            ));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }
    if source_root.join(&manifest.config.assets_dir).is_dir() {
        lines.push(format!("    {}/", manifest.config.assets_dir));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output showing generated HTML files.
///
/// Information-first: each entity leads with its positional index and title,
/// followed by `→` and the output path.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home \u{2192} index.html".to_string());

    lines.push("Posts".to_string());
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}/index.html",
            format_index(i + 1),
            post.title,
            post.slug
        ));
    }

    let tags = tag_counts(manifest);
    lines.push("Tags".to_string());
    for (i, (slug, (name, count))) in tags.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} posts) \u{2192} tags/{}/index.html",
            format_index(i + 1),
            name,
            count,
            slug
        ));
    }

    let page_count = manifest.pages.iter().filter(|p| !p.is_link).count();
    if !manifest.pages.is_empty() {
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            if page.is_link {
                lines.push(format!(
                    "{} {} \u{2192} (external link)",
                    format_index(i + 1),
                    page.link_title
                ));
            } else {
                lines.push(format!(
                    "{} {} \u{2192} {}.html",
                    format_index(i + 1),
                    page.link_title,
                    page.slug
                ));
            }
        }
    }

    lines.push("Feed \u{2192} rss.xml".to_string());

    lines.push(format!(
        "Generated {} post pages, {} tag pages, {} pages",
        manifest.posts.len(),
        tags.len(),
        page_count
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::types::{Page, Post};
    use chrono::NaiveDate;

    fn test_manifest() -> Manifest {
        Manifest {
            posts: vec![
                Post {
                    slug: "one-year-later".to_string(),
                    title: "One Year Later".to_string(),
                    date: NaiveDate::from_ymd_opt(2022, 7, 4).unwrap(),
                    description: Some("Looking back at a year in the city".to_string()),
                    tags: vec!["life".to_string(), "travel".to_string()],
                    body: String::new(),
                    source_path: "posts/2022/one-year-later.md".to_string(),
                },
                Post {
                    slug: "moving-day".to_string(),
                    title: "Moving Day".to_string(),
                    date: NaiveDate::from_ymd_opt(2021, 7, 4).unwrap(),
                    description: None,
                    tags: vec!["life".to_string()],
                    body: String::new(),
                    source_path: "posts/moving-day.md".to_string(),
                },
            ],
            pages: vec![
                Page {
                    title: "About".to_string(),
                    link_title: "about".to_string(),
                    slug: "about".to_string(),
                    body: "# About".to_string(),
                    in_nav: true,
                    sort_key: 40,
                    is_link: false,
                },
                Page {
                    title: "github".to_string(),
                    link_title: "github".to_string(),
                    slug: "github".to_string(),
                    body: "https://github.com/example\n".to_string(),
                    in_nav: true,
                    sort_key: 50,
                    is_link: true,
                },
            ],
            config: SiteConfig::default(),
        }
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_single_digit() {
        assert_eq!(format_index(1), "001");
    }

    #[test]
    fn format_index_triple_digit() {
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        let expected = format!("{}...", "a".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn tag_counts_aggregate_across_posts() {
        let manifest = test_manifest();
        let tags = tag_counts(&manifest);
        assert_eq!(tags["life"].1, 2);
        assert_eq!(tags["travel"].1, 1);
    }

    // =========================================================================
    // Scan output tests
    // =========================================================================

    #[test]
    fn scan_output_lists_posts_with_dates() {
        let manifest = test_manifest();
        let lines = format_scan_output(&manifest, Path::new("/nonexistent"));

        assert_eq!(lines[0], "Posts");
        assert_eq!(lines[1], "001 One Year Later (July 04, 2022)");
        assert_eq!(lines[2], "    Source: posts/2022/one-year-later.md");
        assert_eq!(lines[3], "    Tags: life, travel");
        assert_eq!(lines[4], "    Looking back at a year in the city");
    }

    #[test]
    fn scan_output_marks_link_pages() {
        let manifest = test_manifest();
        let lines = format_scan_output(&manifest, Path::new("/nonexistent"));

        assert!(lines.contains(&"002 github (link)".to_string()));
    }

    #[test]
    fn scan_output_skips_missing_description() {
        let manifest = test_manifest();
        let lines = format_scan_output(&manifest, Path::new("/nonexistent"));

        // Moving Day has no description; its source line is followed by tags
        let idx = lines
            .iter()
            .position(|l| l.starts_with("002 Moving Day"))
            .unwrap();
        assert_eq!(lines[idx + 1], "    Source: posts/moving-day.md");
        assert_eq!(lines[idx + 2], "    Tags: life");
    }

    // =========================================================================
    // Generate output tests
    // =========================================================================

    #[test]
    fn generate_output_lists_post_pages() {
        let manifest = test_manifest();
        let lines = format_generate_output(&manifest);

        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert!(lines.contains(&"001 One Year Later \u{2192} one-year-later/index.html".to_string()));
        assert!(lines.contains(&"002 Moving Day \u{2192} moving-day/index.html".to_string()));
    }

    #[test]
    fn generate_output_lists_tag_pages() {
        let manifest = test_manifest();
        let lines = format_generate_output(&manifest);

        assert!(lines.contains(&"001 life (2 posts) \u{2192} tags/life/index.html".to_string()));
        assert!(lines.contains(&"002 travel (1 posts) \u{2192} tags/travel/index.html".to_string()));
    }

    #[test]
    fn generate_output_pages_and_links() {
        let manifest = test_manifest();
        let lines = format_generate_output(&manifest);

        assert!(lines.contains(&"001 about \u{2192} about.html".to_string()));
        assert!(lines.contains(&"002 github \u{2192} (external link)".to_string()));
    }

    #[test]
    fn generate_output_totals() {
        let manifest = test_manifest();
        let lines = format_generate_output(&manifest);

        assert_eq!(
            lines.last().unwrap(),
            "Generated 2 post pages, 2 tag pages, 1 pages"
        );
    }
}
