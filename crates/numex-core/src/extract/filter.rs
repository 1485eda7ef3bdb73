//! Entity-name routing for numeric extraction.
//!
//! Callers ask for entity types by name, mixing numeric kinds with names
//! handled by other recognizers (PERSON, DATE, EMAIL, ...). Only the
//! numeric ones reach this extractor.

use tracing::debug;

use super::parser::NumericExtractor;
use crate::models::{NumericFinding, NumericKind};

/// Map requested entity names to numeric kinds, ignoring the rest.
///
/// The result keeps the order of first appearance and has no duplicates.
pub fn parse_entity_filter<S: AsRef<str>>(names: &[S]) -> Vec<NumericKind> {
    let mut kinds = Vec::new();

    for name in names {
        match NumericKind::from_str(name.as_ref()) {
            Some(kind) if !kinds.contains(&kind) => kinds.push(kind),
            Some(_) => {}
            None => debug!("Entity type {:?} is not numeric, skipping", name.as_ref()),
        }
    }

    kinds
}

impl NumericExtractor {
    /// Narrow this extractor to the entity names a caller asked for.
    ///
    /// No names keeps every kind. Returns `None` when names were given but
    /// none of them is numeric: the caller wants nothing from this
    /// extractor.
    pub fn for_entities<S: AsRef<str>>(&self, names: &[S]) -> Option<NumericExtractor> {
        if names.is_empty() {
            return Some(self.clone());
        }

        let kinds = parse_entity_filter(names);
        if kinds.is_empty() {
            return None;
        }

        Some(self.clone().with_kinds(&kinds))
    }
}

/// Extract the numeric entities requested by name.
pub fn extract_for_entities<S: AsRef<str>>(
    extractor: &NumericExtractor,
    text: &str,
    names: &[S],
) -> Vec<NumericFinding> {
    extractor
        .for_entities(names)
        .map(|narrowed| narrowed.extract(text))
        .unwrap_or_default()
}
