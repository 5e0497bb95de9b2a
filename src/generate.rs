//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and generates the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): bio plus the post list, newest first
//! - **Post pages** (`/{slug}/index.html`): article with date, reading
//!   indicator, tags, bio footer, and prev/next navigation
//! - **Tag pages** (`/tags/index.html`, `/tags/{tag}/index.html`)
//! - **Root pages** (`/{slug}.html`): markdown pages such as About
//! - **Feed** (`/rss.xml`): RSS 2.0, one item per post
//!
//! ## Reading indicator
//!
//! Every post listing and article header shows a row of "☕️" glyphs (one per
//! length tier) followed by "N minute read". The estimate runs over the
//! *rendered* HTML body, so the markup-counting quirks of
//! [`readtime::estimate`] apply exactly as they always have.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── about.html
//! ├── rss.xml
//! ├── moving-day/
//! │   └── index.html
//! └── tags/
//!     ├── index.html
//!     └── life/
//!         └── index.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; rendered
//! Markdown is the only raw HTML that goes in unescaped.

use crate::config::{self, SiteMeta, SocialMeta};
use crate::markdown;
use crate::naming::slugify;
use crate::readtime::{self, ReadingEstimate};
use crate::types::{Manifest, Page, Post};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// One indicator glyph per length tier, as rendered on the site.
const READING_GLYPH: &str = "☕️ ";

/// A post plus everything derived from its body at render time.
pub struct RenderedPost {
    pub post: Post,
    /// Rendered HTML body.
    pub html: String,
    /// Generated plain-text excerpt.
    pub excerpt: String,
    /// Reading estimate over the rendered body.
    pub estimate: ReadingEstimate,
}

impl RenderedPost {
    fn render(post: Post) -> Self {
        let html = markdown::render_html(&post.body);
        let excerpt = markdown::excerpt(&post.body);
        let estimate = readtime::estimate(&html);
        Self {
            post,
            html,
            excerpt,
            estimate,
        }
    }

    /// Listing summary: the explicit description, or the generated excerpt.
    fn summary(&self) -> &str {
        self.post.description.as_deref().unwrap_or(&self.excerpt)
    }
}

/// Tag with its display name and the posts carrying it, newest first.
struct TagGroup<'a> {
    name: String,
    posts: Vec<&'a RenderedPost>,
}

pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    source_root: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, output_dir, source_root)
}

/// Generate the full site from an in-memory manifest.
pub fn generate_site(
    manifest: &Manifest,
    output_dir: &Path,
    source_root: &Path,
) -> Result<(), GenerateError> {
    let site = &manifest.config.site;

    // Generate CSS with colors from config
    let color_css = config::generate_color_css(&manifest.config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;

    // Copy static assets to the output root
    let assets = source_root.join(&manifest.config.assets_dir);
    if assets.is_dir() {
        copy_dir_recursive(&assets, output_dir)?;
    }

    // Render all post bodies up front; everything downstream reads these
    let rendered: Vec<RenderedPost> = manifest
        .posts
        .par_iter()
        .map(|post| RenderedPost::render(post.clone()))
        .collect();

    let nav_pages: Vec<&Page> = manifest.pages.iter().filter(|p| p.in_nav).collect();

    // Index page
    let index_html = render_index(site, &rendered, &nav_pages, &css);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    // Post pages, with prev/next from the newest-first ordering
    for (idx, rp) in rendered.iter().enumerate() {
        let newer = if idx > 0 { Some(&rendered[idx - 1]) } else { None };
        let older = rendered.get(idx + 1);

        let post_dir = output_dir.join(&rp.post.slug);
        fs::create_dir_all(&post_dir)?;
        let post_html = render_post_page(rp, newer, older, site, &nav_pages, &css);
        fs::write(post_dir.join("index.html"), post_html.into_string())?;
    }

    // Tag pages
    let tags = collect_tags(&rendered);
    let tags_dir = output_dir.join("tags");
    fs::create_dir_all(&tags_dir)?;
    let tags_html = render_tags_index(site, &tags, &nav_pages, &css);
    fs::write(tags_dir.join("index.html"), tags_html.into_string())?;

    for (slug, group) in &tags {
        let tag_dir = tags_dir.join(slug);
        fs::create_dir_all(&tag_dir)?;
        let tag_html = render_tag_page(site, group, &nav_pages, &css);
        fs::write(tag_dir.join("index.html"), tag_html.into_string())?;
    }

    // Root pages (external link pages have no page of their own)
    for page in manifest.pages.iter().filter(|p| !p.is_link) {
        let page_html = render_page(page, site, &nav_pages, &css);
        fs::write(
            output_dir.join(format!("{}.html", page.slug)),
            page_html.into_string(),
        )?;
    }

    // Feed
    fs::write(output_dir.join("rss.xml"), render_rss(site, &rendered))?;

    Ok(())
}

/// Group rendered posts by tag slug. Display name is the first spelling seen;
/// tags with no alphanumeric content are dropped.
fn collect_tags(rendered: &[RenderedPost]) -> BTreeMap<String, TagGroup<'_>> {
    let mut tags: BTreeMap<String, TagGroup> = BTreeMap::new();
    for rp in rendered {
        for tag in &rp.post.tags {
            let slug = slugify(tag);
            if slug.is_empty() {
                continue;
            }
            tags.entry(slug)
                .or_insert_with(|| TagGroup {
                    name: tag.clone(),
                    posts: Vec::new(),
                })
                .posts
                .push(rp);
        }
    }
    tags
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

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="alternate" type="application/rss+xml" href="/rss.xml";
                style { (PreEscaped(css.to_string())) }
            }
            body {
                div.global-wrapper {
                    (content)
                }
            }
        }
    }
}

/// Renders the site header: title link plus Tags/page/external links.
///
/// The index page gets the full-size heading; every other page gets the small
/// home link.
fn site_header(title: &str, is_root: bool, nav_pages: &[&Page]) -> Markup {
    html! {
        header.global-header {
            @if is_root {
                h1.main-heading { a href="/" { (title) } }
            } @else {
                a.header-link-home href="/" { (title) }
            }
            div.header-items {
                a href="/tags/" { "Tags" }
                @for page in nav_pages {
                    @if page.is_link {
                        a href=(page.body.trim()) target="_blank" rel="noopener" { (page.link_title) }
                    } @else {
                        a href={ "/" (page.slug) ".html" } { (page.link_title) }
                    }
                }
            }
        }
    }
}

/// Renders the site footer: social links, feed link, copyright line.
fn site_footer(social: &SocialMeta) -> Markup {
    let year = chrono::Utc::now().year();
    html! {
        footer.site-footer {
            @if let Some(twitter) = &social.twitter {
                div { a href={ "https://twitter.com/" (twitter) } { "twitter" } }
            }
            @if let Some(github) = &social.github {
                div { a href={ "https://github.com/" (github) } { "github" } }
            }
            div { a href="/rss.xml" { "rss" } }
            div { "© " (year) ", Built with simple-blog" }
        }
    }
}

/// Renders the author bio block. Nothing renders without a configured name;
/// summary and social links are each optional on their own.
fn bio(site: &SiteMeta) -> Markup {
    let author = &site.author;
    let social = &site.social;
    html! {
        @if let Some(name) = &author.name {
            div.bio {
                p {
                    "A blog written by " strong { (name) }
                    @if let Some(summary) = &author.summary { " " (summary) }
                    " "
                    @if let Some(twitter) = &social.twitter {
                        a href={ "https://twitter.com/" (twitter) } {
                            "You should follow me on Twitter"
                        }
                        @if social.github.is_some() { " or " }
                    }
                    @if let Some(github) = &social.github {
                        a href={ "https://github.com/" (github) } {
                            "have a look at my GitHub"
                        }
                    }
                }
            }
        }
    }
}

/// Renders the length indicator glyphs and "N minute read" label.
fn reading_info(estimate: ReadingEstimate) -> Markup {
    let indicator = READING_GLYPH.repeat(estimate.tier as usize);
    html! {
        (indicator) "\u{a0}" (estimate.minutes) " minute read"
    }
}

/// Renders tag links for a post.
fn tag_links(tags: &[String]) -> Markup {
    html! {
        @for tag in tags {
            a.blog-post-tag href={ "/tags/" (slugify(tag)) "/" } { (tag) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index/home page with the post list.
fn render_index(
    site: &SiteMeta,
    rendered: &[RenderedPost],
    nav_pages: &[&Page],
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(&site.title, true, nav_pages))
        main {
            (bio(site))
            @if rendered.is_empty() {
                p { "No blog posts found!" }
            } @else {
                h1 { "Posts" }
                ol.post-list {
                    @for rp in rendered {
                        li {
                            article.post-list-item {
                                header {
                                    h2 {
                                        a href={ "/" (rp.post.slug) "/" } { (rp.post.title) }
                                    }
                                    div.post-item-info {
                                        small { (rp.post.display_date()) }
                                        small { (reading_info(rp.estimate)) }
                                    }
                                }
                                section {
                                    p { (rp.summary()) }
                                    @if !rp.post.tags.is_empty() {
                                        p {
                                            strong { "Tags:\u{a0}" }
                                            (tag_links(&rp.post.tags))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(&site.social))
    };

    base_document(&site.title, css, content)
}

/// Renders a single post page.
fn render_post_page(
    rp: &RenderedPost,
    newer: Option<&RenderedPost>,
    older: Option<&RenderedPost>,
    site: &SiteMeta,
    nav_pages: &[&Page],
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(&site.title, false, nav_pages))
        main {
            article.blog-post {
                header {
                    h1 { (rp.post.title) }
                    div.blog-post-info {
                        p { (rp.post.display_date()) }
                        p { (reading_info(rp.estimate)) }
                    }
                }
                section.blog-post-body {
                    (PreEscaped(rp.html.clone()))
                }
                @if !rp.post.tags.is_empty() {
                    section {
                        p {
                            strong { "Tags:\u{a0}" }
                            (tag_links(&rp.post.tags))
                        }
                    }
                }
                hr;
                footer {
                    (bio(site))
                }
            }
            nav.blog-post-nav {
                ul {
                    li {
                        @if let Some(n) = newer {
                            a href={ "/" (n.post.slug) "/" } rel="next" {
                                "← " (n.post.title)
                            }
                        }
                    }
                    li {
                        @if let Some(o) = older {
                            a href={ "/" (o.post.slug) "/" } rel="prev" {
                                (o.post.title) " →"
                            }
                        }
                    }
                }
            }
        }
        (site_footer(&site.social))
    };

    let title = format!("{} - {}", rp.post.title, site.title);
    base_document(&title, css, content)
}

/// Renders the tag directory page.
fn render_tags_index(
    site: &SiteMeta,
    tags: &BTreeMap<String, TagGroup<'_>>,
    nav_pages: &[&Page],
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(&site.title, false, nav_pages))
        main {
            h1 { "Tags" }
            @if tags.is_empty() {
                p { "No tags yet." }
            } @else {
                ul.tag-list {
                    @for (slug, group) in tags {
                        li {
                            a href={ "/tags/" (slug) "/" } { (group.name) }
                            " "
                            span.tag-count { "(" (group.posts.len()) ")" }
                        }
                    }
                }
            }
        }
        (site_footer(&site.social))
    };

    let title = format!("Tags - {}", site.title);
    base_document(&title, css, content)
}

/// Renders the post list for one tag.
fn render_tag_page(
    site: &SiteMeta,
    group: &TagGroup<'_>,
    nav_pages: &[&Page],
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(&site.title, false, nav_pages))
        main {
            h1 { "Tagged \"" (group.name) "\"" }
            ol.post-list {
                @for rp in &group.posts {
                    li {
                        article.post-list-item {
                            header {
                                h2 {
                                    a href={ "/" (rp.post.slug) "/" } { (rp.post.title) }
                                }
                                div.post-item-info {
                                    small { (rp.post.display_date()) }
                                    small { (reading_info(rp.estimate)) }
                                }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(&site.social))
    };

    let title = format!("{} - {}", group.name, site.title);
    base_document(&title, css, content)
}

/// Renders a root markdown page (e.g. About).
fn render_page(page: &Page, site: &SiteMeta, nav_pages: &[&Page], css: &str) -> Markup {
    let body_html = markdown::render_html(&page.body);

    let content = html! {
        (site_header(&site.title, false, nav_pages))
        main {
            article.page-content {
                (PreEscaped(body_html))
            }
        }
        (site_footer(&site.social))
    };

    let title = format!("{} - {}", page.title, site.title);
    base_document(&title, css, content)
}

// ============================================================================
// Feed
// ============================================================================

/// Renders the RSS 2.0 feed.
///
/// Item links are absolute when `site.base_url` is configured, site-relative
/// otherwise.
fn render_rss(site: &SiteMeta, rendered: &[RenderedPost]) -> String {
    let base = site.base_url.trim_end_matches('/');

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\">\n");
    out.push_str("<channel>\n");
    out.push_str(&format!("  <title>{}</title>\n", xml_escape(&site.title)));
    out.push_str(&format!(
        "  <description>{}</description>\n",
        xml_escape(&site.description)
    ));
    out.push_str(&format!("  <link>{}/</link>\n", base));

    for rp in rendered {
        let link = format!("{}/{}/", base, rp.post.slug);
        let pub_date = rp
            .post
            .date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .format("%a, %d %b %Y %H:%M:%S +0000");

        out.push_str("  <item>\n");
        out.push_str(&format!(
            "    <title>{}</title>\n",
            xml_escape(&rp.post.title)
        ));
        out.push_str(&format!("    <link>{}</link>\n", link));
        out.push_str(&format!("    <guid>{}</guid>\n", link));
        out.push_str(&format!("    <pubDate>{}</pubDate>\n", pub_date));
        out.push_str(&format!(
            "    <description>{}</description>\n",
            xml_escape(rp.summary())
        ));
        out.push_str("  </item>\n");
    }

    out.push_str("</channel>\n");
    out.push_str("</rss>\n");
    out
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
