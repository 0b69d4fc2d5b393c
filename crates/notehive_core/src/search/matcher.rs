//! Case-insensitive matchers backing repository search.
//!
//! # Invariants
//! - Text matching is substring-based; an empty needle matches every
//!   haystack.
//! - Tag matching requires a non-empty intersection; an empty query set
//!   matches nothing. The asymmetry with text search is deliberate.

use std::collections::BTreeSet;

/// True when `haystack` contains `needle`, ignoring case.
pub fn text_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when at least one queried tag appears in `tags`.
///
/// Queried values are lowercased before the membership test; `tags` is
/// expected to hold lowercased entries already.
pub fn tags_intersect(tags: &BTreeSet<String>, queried: &[String]) -> bool {
    queried.iter().any(|tag| tags.contains(&tag.to_lowercase()))
}
