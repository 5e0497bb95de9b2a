//! Filename and tag naming conventions.
//!
//! Root-level pages follow the `NNN-name.md` pattern: an optional numeric
//! prefix controls header-nav ordering, and dashes in the name portion become
//! spaces for display:
//!
//! - `040-about.md` → "about", nav position 40
//! - `050-who-am-i.md` → "who am i", nav position 50
//! - `notes.md` → generated but hidden from nav
//!
//! Tags come from post front matter as free text and need stable URL slugs;
//! [`slugify`] lowercases and collapses non-alphanumeric runs into single
//! dashes so `"Rust Programming"` and `"rust-programming"` land on the same
//! `/tags/rust-programming/` path.

/// Result of parsing a numbered entry name like `040-about`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g. `40` from `040-about`).
    pub number: Option<u32>,
    /// Raw name part after `NNN-`, dashes preserved. Empty if number-only.
    /// For unnumbered entries, this is the full input.
    pub name: String,
    /// Display title: name with dashes converted to spaces.
    pub display_title: String,
}

/// Parse an entry name following the `NNN-name` convention.
///
/// Handles these patterns:
/// - `"040-about"` → number=Some(40), name="about", display_title="about"
/// - `"050-who-am-i"` → number=Some(50), name="who-am-i", display_title="who am i"
/// - `"001"` / `"001-"` → number=Some(1), name="", display_title=""
/// - `"notes"` → number=None, name="notes", display_title="notes"
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some(dash_pos) = name.find('-') {
        let prefix = &name[..dash_pos];
        if let Ok(num) = prefix.parse::<u32>() {
            let raw = &name[dash_pos + 1..];
            return ParsedName {
                number: Some(num),
                name: raw.to_string(),
                display_title: raw.replace('-', " "),
            };
        }
    }
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: String::new(),
            display_title: String::new(),
        };
    }
    ParsedName {
        number: None,
        name: name.to_string(),
        display_title: name.replace('-', " "),
    }
}

/// Turn a free-text tag into a URL slug.
///
/// Lowercases, maps every run of non-alphanumeric characters to a single
/// dash, and trims leading/trailing dashes. Returns an empty string only for
/// input with no alphanumeric content at all.
pub fn slugify(tag: &str) -> String {
    let mut slug = String::with_capacity(tag.len());
    let mut pending_dash = false;
    for c in tag.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    slug
}
