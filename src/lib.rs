//! # Simple Blog
//!
//! A minimal static site generator for personal blogs. Your filesystem is the
//! data source: markdown files under `posts/` become posts, root-level
//! markdown files become pages, and a single `config.toml` carries the site
//! identity.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Simple Blog processes content through two independent stages, joined by a
//! JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site + rss.xml)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: each stage is a function from manifest to manifest (or
//!   manifest to files), so tests can exercise pipeline logic directly.
//! - **Scriptability**: `scan` alone answers "what would build?" without
//!   writing a single HTML file (that's also all `check` does).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory, parses posts and pages, produces the manifest |
//! | [`generate`] | Stage 2 — renders the final HTML site and RSS feed from the manifest using Maud |
//! | [`frontmatter`] | `+++`-fenced TOML front matter for posts |
//! | [`markdown`] | Markdown rendering and plain-text excerpt extraction |
//! | [`readtime`] | Reading-time estimate and length tier for post listings |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types serialized between stages (`Manifest`, `Post`, `Page`) |
//! | [`naming`] | `NNN-name` filename convention parser and tag slugification |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped; rendered
//!   markdown is the only raw HTML let through.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Reading Time Is Part of the Contract
//!
//! The length indicator on every listing comes from [`readtime::estimate`],
//! which counts space-separated tokens of the *rendered* body and divides by
//! a fixed words-per-minute rate. The tokenizer is deliberately naive (markup
//! counts, newlines don't split) — see the module docs before "fixing" it.
//!
//! ## Front Matter Over Conventions
//!
//! Posts carry their own metadata in a `+++`-fenced TOML block: title, date,
//! optional description, tags, draft flag. The filename stem is the one piece
//! of filesystem-derived identity (the URL slug). Root pages instead use the
//! `NNN-name.md` prefix convention for nav ordering, so one-off pages never
//! need front matter.
//!
//! # The "Forever Stack"
//!
//! Simple Blog is designed to be usable decades from now with minimal fuss.
//! The output is plain HTML, established CSS, and no JavaScript at all. The
//! binary has zero runtime dependencies. The generated site can be dropped on
//! any file server — no Node, no PHP, no database. If a browser can render
//! HTML, it can display your blog.

pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod readtime;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
