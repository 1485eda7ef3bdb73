//! Numeric value extraction module.

mod filter;
mod parser;
mod properties;
pub mod rules;

pub use filter::{extract_for_entities, parse_entity_filter};
pub use parser::{resolve_overlaps, NumericExtractor};

use crate::models::{NumericFinding, NumericKind};

/// Extract every number, measurement and money amount from `text`.
///
/// Findings are ordered by position and never overlap. An input without
/// matches yields an empty vector.
pub fn extract_numeric_values(text: &str) -> Vec<NumericFinding> {
    NumericExtractor::new().extract(text)
}

/// Like [`extract_numeric_values`], keeping only the given kinds.
/// An empty `kinds` slice keeps everything.
pub fn extract_numeric_values_filtered(text: &str, kinds: &[NumericKind]) -> Vec<NumericFinding> {
    NumericExtractor::new().with_kinds(kinds).extract(text)
}
