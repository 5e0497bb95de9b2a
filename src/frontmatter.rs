//! TOML front matter parsing for posts.
//!
//! Every post starts with a `+++`-fenced TOML block:
//!
//! ```text
//! +++
//! title = "Moving to Saint Louis"
//! date = "2021-07-04"
//! description = "First impressions of the city"
//! tags = ["life", "travel"]
//! +++
//!
//! Markdown body...
//! ```
//!
//! `title` and `date` are required; everything else has a default. Dates are
//! quoted `YYYY-MM-DD` strings. Unknown keys are rejected to catch typos
//! early, same as `config.toml`.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Front matter fence line.
const FENCE: &str = "+++";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing opening +++ fence")]
    MissingOpeningFence,
    #[error("missing closing +++ fence")]
    MissingClosingFence,
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parsed front matter of a single post.
///
/// `description` stays optional all the way to the templates, which fall back
/// to a generated excerpt when it is absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontMatter {
    /// Post title shown in listings and the article header.
    pub title: String,
    /// Publication date, `"YYYY-MM-DD"`. Controls ordering and prev/next links.
    pub date: NaiveDate,
    /// Optional summary used in listings and the feed instead of the excerpt.
    #[serde(default)]
    pub description: Option<String>,
    /// Tags for the tag index pages. May be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Drafts are skipped by the scanner entirely.
    #[serde(default)]
    pub draft: bool,
}

/// Split a post file into front matter and Markdown body.
///
/// The file must begin with a `+++` fence line; the body is everything after
/// the closing fence, with one leading blank line trimmed.
pub fn parse(content: &str) -> Result<(FrontMatter, String), FrontMatterError> {
    let rest = content
        .strip_prefix(FENCE)
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
        .ok_or(FrontMatterError::MissingOpeningFence)?;

    let (raw_matter, body) = split_at_closing_fence(rest)?;

    let matter: FrontMatter = toml::from_str(raw_matter)?;
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);

    Ok((matter, body.to_string()))
}

/// Find the closing fence on its own line and split around it.
fn split_at_closing_fence(rest: &str) -> Result<(&str, &str), FrontMatterError> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let body_start = offset + line.len();
            return Ok((&rest[..offset], &rest[body_start..]));
        }
        offset += line.len();
    }
    Err(FrontMatterError::MissingClosingFence)
}
