//! Plain number extraction.

use super::patterns::PLAIN_NUMBER;
use super::{ExtractionMatch, FieldExtractor, MatchPriority};
use crate::models::NumericFinding;

/// Standalone integer or dot-decimal literals ("123", "2.75").
pub struct PlainNumberExtractor;

impl PlainNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PlainNumberExtractor {
    type Output = ExtractionMatch<NumericFinding>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PLAIN_NUMBER
            .find_iter(text)
            .filter_map(|m| {
                let value = m.as_str().parse::<f64>().ok()?;
                Some(ExtractionMatch::new(
                    NumericFinding::number(value, m.as_str()),
                    MatchPriority::PlainNumber,
                    m.start(),
                    m.end(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_number() {
        let result = PlainNumberExtractor::new().extract("O número 123 está aqui.").unwrap();
        assert_eq!(result.value, NumericFinding::number(123.0, "123"));
    }

    #[test]
    fn test_comma_splits_numbers() {
        let values: Vec<f64> = PlainNumberExtractor::new()
            .extract_all("1,5 ou 2.75")
            .into_iter()
            .map(|m| m.value.value)
            .collect();
        assert_eq!(values, vec![1.0, 5.0, 2.75]);
    }

    #[test]
    fn test_number_glued_to_unknown_unit() {
        let result = PlainNumberExtractor::new().extract("Comprou 5kg de arroz").unwrap();
        assert_eq!(result.value, NumericFinding::number(5.0, "5"));
        assert_eq!(result.position.end, 9);
    }

    #[test]
    fn test_no_numbers() {
        assert!(PlainNumberExtractor::new().extract_all("sem números").is_empty());
        assert!(PlainNumberExtractor::new().extract_all("").is_empty());
    }
}
