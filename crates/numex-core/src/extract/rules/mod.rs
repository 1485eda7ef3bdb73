//! Rule-based matchers for numbers, measurements and money amounts.

pub mod measures;
pub mod money;
pub mod numbers;
pub mod numerals;
pub mod patterns;
pub mod tables;

pub use measures::{DigitMeasureExtractor, WordMeasureExtractor};
pub use money::{DigitCurrencyExtractor, WordCurrencyExtractor};
pub use numbers::PlainNumberExtractor;
pub use numerals::{parse_numeral, parse_word_numeral, tokenize, Token, TokenKind};
pub use tables::validate_tables;

use crate::models::Span;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence from text.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Precedence of a matcher when candidate spans overlap.
///
/// Variants are declared strongest first, so the derived `Ord` sorts the
/// winning candidates to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchPriority {
    /// `R$ 99,99`, `$10.50`
    DigitCurrency,
    /// `vinte e cinco reais e cinquenta centavos`
    WordCurrency,
    /// `25 metros`
    DigitMeasure,
    /// `dois km`
    WordMeasure,
    /// `123`
    PlainNumber,
}

/// A candidate match with its priority and position in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Matcher precedence.
    pub priority: MatchPriority,
    /// Byte range in the source text.
    pub position: Span,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, priority: MatchPriority, start: usize, end: usize) -> Self {
        Self {
            value,
            priority,
            position: Span::new(start, end),
        }
    }
}
