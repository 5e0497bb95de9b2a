//! Reading time estimation.
//!
//! Posts display a coarse length indicator (a row of repeated glyphs) next to
//! an estimated reading time in minutes. Both come from a single pass over the
//! rendered article body.
//!
//! ## Word counting
//!
//! The body is split on single space characters and non-empty segments are
//! counted. This is deliberately crude: markup tags and punctuation-attached
//! words each count as one token, and words separated only by newlines count
//! as a single token. The numbers this produces are the numbers readers have
//! seen on every post so far, so the approximation is part of the contract —
//! swapping in real word-boundary tokenization would silently shift every
//! estimate on the site.
//!
//! ## Tiers
//!
//! Minutes map onto four length tiers via strict less-than thresholds,
//! first match wins:
//!
//! | minutes | tier |
//! |---------|------|
//! | < 5     | 1    |
//! | < 12    | 2    |
//! | < 25    | 3    |
//! | ≥ 25    | 4    |
//!
//! A post that rounds to exactly 5 minutes is tier 2, exactly 12 is tier 3,
//! exactly 25 is tier 4. Rounding is half-away-from-zero, so a 1350-token
//! body (4.5 minutes) rounds up to 5.

/// Assumed reading rate in words per minute.
pub const READING_RATE: f64 = 300.0;

/// Result of estimating a post body: minutes plus a 1–4 length tier.
///
/// The tier is the number of indicator glyphs the templates repeat in front
/// of the "N minute read" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingEstimate {
    /// Length tier, always in `1..=4`.
    pub tier: u8,
    /// Estimated reading time, rounded to whole minutes.
    pub minutes: u32,
}

/// Estimate reading time for a rendered article body.
///
/// Total over all inputs: empty or whitespace-only content yields 0 minutes
/// and tier 1, a single spaceless blob counts as one word, and arbitrarily
/// long content saturates at tier 4. Pure — same input, same output.
pub fn estimate(content: &str) -> ReadingEstimate {
    let word_count = content.split(' ').filter(|token| !token.is_empty()).count();
    let minutes = (word_count as f64 / READING_RATE).round() as u32;

    let tier = if minutes < 5 {
        1
    } else if minutes < 12 {
        2
    } else if minutes < 25 {
        3
    } else {
        4
    };

    ReadingEstimate { tier, minutes }
}
