//! Core library for numeric value extraction from Portuguese text.
//!
//! This crate provides:
//! - Plain numbers, measurements and money amounts written in digits
//!   ("123", "25 metros", "R$ 99,99", "$10.50")
//! - Spelled-out Portuguese numerals up to 999 ("vinte e cinco reais e
//!   cinquenta centavos", "dois km")
//! - Overlap resolution so every span of text yields at most one finding
//!
//! ```
//! use numex_core::{extract_numeric_values, NumericKind};
//!
//! let findings = extract_numeric_values("Ele pagou vinte e cinco reais e cinquenta centavos.");
//! assert_eq!(findings[0].kind, NumericKind::Money);
//! assert_eq!(findings[0].value, 25.5);
//! ```

pub mod error;
pub mod extract;
pub mod models;

pub use error::{NumexError, Result, TableError};
pub use extract::rules::{parse_word_numeral, validate_tables, ExtractionMatch, FieldExtractor, MatchPriority};
pub use extract::{
    extract_for_entities, extract_numeric_values, extract_numeric_values_filtered,
    parse_entity_filter, resolve_overlaps, NumericExtractor,
};
pub use models::{ExtractionConfig, NumericFinding, NumericKind, NumexConfig, OutputConfig, Span};
