//! End-to-end pipeline tests: scan the fixture blog, generate the site into a
//! temp directory, and inspect the files that come out.

use simple_blog::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_fixtures() -> TempDir {
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

/// Run the full pipeline over the fixtures. Returns (content dir, output dir).
fn build_site() -> (TempDir, TempDir) {
    let content = setup_fixtures();
    let output = TempDir::new().unwrap();

    let manifest = scan::scan(content.path()).unwrap();
    generate::generate_site(&manifest, output.path(), content.path()).unwrap();

    (content, output)
}

fn read(output: &TempDir, rel: &str) -> String {
    fs::read_to_string(output.path().join(rel))
        .unwrap_or_else(|e| panic!("missing {rel}: {e}"))
}

#[test]
fn index_page_lists_all_posts() {
    let (_content, output) = build_site();
    let index = read(&output, "index.html");

    assert!(index.contains("Adventures in Saint Louis"));
    assert!(index.contains("One Year Later"));
    assert!(index.contains("Gateway Arch"));
    assert!(index.contains("Moving Day"));
    assert!(index.contains("Hello World"));
    assert!(index.contains("minute read"));
    assert!(index.contains("A blog written by"));
}

#[test]
fn post_pages_have_article_and_neighbors() {
    let (_content, output) = build_site();
    let post = read(&output, "moving-day/index.html");

    assert!(post.contains("<h1>Moving Day</h1>"));
    assert!(post.contains("July 04, 2021"));
    assert!(post.contains("minute read"));
    // Newest-first ordering puts Gateway Arch as the newer neighbor and
    // Hello World as the older one
    assert!(post.contains("← Gateway Arch"));
    assert!(post.contains("Hello World →"));
    // Tag links from front matter
    assert!(post.contains("/tags/life/"));
    assert!(post.contains("/tags/travel/"));
}

#[test]
fn newest_post_has_no_newer_neighbor() {
    let (_content, output) = build_site();
    let post = read(&output, "one-year-later/index.html");

    assert!(!post.contains('←'));
    assert!(post.contains("Gateway Arch →"));
}

#[test]
fn tag_pages_generated() {
    let (_content, output) = build_site();

    let tags_index = read(&output, "tags/index.html");
    assert!(tags_index.contains("life"));
    assert!(tags_index.contains("travel"));
    assert!(tags_index.contains("meta"));

    let life = read(&output, "tags/life/index.html");
    assert!(life.contains("Moving Day"));
    assert!(life.contains("One Year Later"));
    assert!(!life.contains("Gateway Arch"));
}

#[test]
fn about_page_generated_and_linked() {
    let (_content, output) = build_site();

    let about = read(&output, "about.html");
    assert!(about.contains("neuroscience lab"));

    let index = read(&output, "index.html");
    assert!(index.contains("/about.html"));
}

#[test]
fn external_link_page_in_header_only() {
    let (_content, output) = build_site();

    assert!(!output.path().join("github.html").exists());
    let index = read(&output, "index.html");
    assert!(index.contains("https://github.com/henry-burgess"));
}

#[test]
fn rss_feed_has_all_posts() {
    let (_content, output) = build_site();
    let rss = read(&output, "rss.xml");

    assert_eq!(rss.matches("<item>").count(), 4);
    assert!(rss.contains("<link>https://blog.example.com/moving-day/</link>"));
    assert!(rss.contains("<title>Adventures in Saint Louis</title>"));
}

#[test]
fn assets_copied_to_output_root() {
    let (_content, output) = build_site();
    assert!(output.path().join("favicon.svg").exists());
}

#[test]
fn drafts_produce_no_pages() {
    let (_content, output) = build_site();
    assert!(!output.path().join("half-written").exists());
}

#[test]
fn generate_reads_manifest_from_disk() {
    // The CLI path: scan writes manifest.json, generate reads it back.
    let content = setup_fixtures();
    let output = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();

    let manifest = scan::scan(content.path()).unwrap();
    let manifest_path = temp.path().join("manifest.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    generate::generate(&manifest_path, output.path(), content.path()).unwrap();

    assert!(output.path().join("index.html").exists());
    assert!(output.path().join("rss.xml").exists());
}
