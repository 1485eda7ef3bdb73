//! Measurement extraction (digit and spelled-out amounts with a unit).

use super::numerals::{parse_numeral, tokenize};
use super::patterns::MEASURE_DIGITS;
use super::tables::lookup_measure_unit;
use super::{ExtractionMatch, FieldExtractor, MatchPriority};
use crate::models::NumericFinding;

/// Digit amounts followed by a known unit ("25 metros", "3.5km").
pub struct DigitMeasureExtractor;

impl DigitMeasureExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DigitMeasureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DigitMeasureExtractor {
    type Output = ExtractionMatch<NumericFinding>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in MEASURE_DIGITS.captures_iter(text) {
            let Some(full_match) = caps.get(0) else { continue };

            // Unknown unit words are left for the plain number matcher
            let Some(unit) = lookup_measure_unit(&caps[2]) else { continue };
            let Ok(value) = caps[1].parse::<f64>() else { continue };

            results.push(ExtractionMatch::new(
                NumericFinding::measure(value, unit, full_match.as_str()),
                MatchPriority::DigitMeasure,
                full_match.start(),
                full_match.end(),
            ));
        }

        results
    }
}

/// Spelled-out amounts followed by a known unit ("dois km").
pub struct WordMeasureExtractor;

impl WordMeasureExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordMeasureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for WordMeasureExtractor {
    type Output = ExtractionMatch<NumericFinding>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let tokens = tokenize(text);
        let mut results = Vec::new();
        let mut index = 0;

        while index < tokens.len() {
            let matched = parse_numeral(&tokens, index).and_then(|(value, next)| {
                let unit_token = tokens.get(next).filter(|t| t.joined)?;
                let unit = lookup_measure_unit(&unit_token.lower)?;
                Some((value, unit, next))
            });

            let Some((value, unit, unit_index)) = matched else {
                index += 1;
                continue;
            };

            let start = tokens[index].span.start;
            let end = tokens[unit_index].span.end;
            results.push(ExtractionMatch::new(
                NumericFinding::measure(f64::from(value), unit, &text[start..end]),
                MatchPriority::WordMeasure,
                start,
                end,
            ));

            index = unit_index + 1;
        }

        results
    }
}
