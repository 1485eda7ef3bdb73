//! Money amount extraction (R$ / $ digit amounts and spelled-out amounts).

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use super::numerals::{parse_numeral, tokenize, Token};
use super::patterns::{BRL_AMOUNT, USD_AMOUNT};
use super::tables::{is_centavos_noun, lookup_currency_noun, lookup_currency_symbol, Currency};
use super::{ExtractionMatch, FieldExtractor, MatchPriority};
use crate::models::NumericFinding;

/// Digit amounts introduced by a currency symbol ("R$ 99,99", "$10.50").
pub struct DigitCurrencyExtractor;

impl DigitCurrencyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DigitCurrencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DigitCurrencyExtractor {
    type Output = ExtractionMatch<NumericFinding>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in BRL_AMOUNT.captures_iter(text) {
            let Some(full_match) = caps.get(0) else { continue };
            if attached_to_word(text, full_match.start()) {
                continue;
            }

            let integer_part = caps[2].replace('.', "");
            let fraction = caps.get(3).map(|m| m.as_str());

            if let (Some(currency), Some(value)) =
                (lookup_currency_symbol(&caps[1]), parse_amount(&integer_part, fraction))
            {
                results.push(money_match(
                    value,
                    currency,
                    MatchPriority::DigitCurrency,
                    text,
                    full_match.start(),
                    full_match.end(),
                ));
            }
        }

        for caps in USD_AMOUNT.captures_iter(text) {
            let Some(full_match) = caps.get(0) else { continue };

            // The "$" of "R$" (or of any other word) is not a dollar sign
            if attached_to_word(text, full_match.start()) {
                continue;
            }

            let integer_part = caps[2].replace(',', "");
            let fraction = caps.get(3).map(|m| m.as_str());

            if let (Some(currency), Some(value)) =
                (lookup_currency_symbol(&caps[1]), parse_amount(&integer_part, fraction))
            {
                results.push(money_match(
                    value,
                    currency,
                    MatchPriority::DigitCurrency,
                    text,
                    full_match.start(),
                    full_match.end(),
                ));
            }
        }

        results.sort_by_key(|m| m.position.start);
        results
    }
}

/// Amounts followed by a currency noun, with an optional cents clause
/// ("vinte e cinco reais e cinquenta centavos", "25 reais").
pub struct WordCurrencyExtractor {
    word_numerals: bool,
}

impl WordCurrencyExtractor {
    pub fn new() -> Self {
        Self { word_numerals: true }
    }

    /// Accept spelled-out amounts. When disabled only digit amounts
    /// ("25 reais") are recognized.
    pub fn with_word_numerals(mut self, enabled: bool) -> Self {
        self.word_numerals = enabled;
        self
    }

    /// Integer amount at `index` as a digit string, with the index after it.
    /// Digit tokens are kept as written so any length survives.
    fn parse_amount_at(&self, tokens: &[Token<'_>], index: usize) -> Option<(String, usize)> {
        let token = tokens.get(index)?;
        if token.is_integer() {
            return Some((token.text.to_string(), index + 1));
        }
        if self.word_numerals {
            return parse_numeral(tokens, index).map(|(value, next)| (value.to_string(), next));
        }
        None
    }

    /// Parse `"e" <amount> centavos` at `index`; returns cents and the
    /// index after the clause.
    fn parse_cents_at(&self, tokens: &[Token<'_>], index: usize) -> Option<(u32, usize)> {
        let conjunction = tokens.get(index)?;
        if !conjunction.joined || conjunction.lower != "e" {
            return None;
        }
        if !tokens.get(index + 1)?.joined {
            return None;
        }

        let (cents, next) = self.parse_amount_at(tokens, index + 1)?;
        let cents: u32 = cents.parse().ok().filter(|cents| *cents < 100)?;
        let noun = tokens.get(next)?;

        if noun.joined && is_centavos_noun(&noun.lower) {
            Some((cents, next + 1))
        } else {
            None
        }
    }
}

impl Default for WordCurrencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for WordCurrencyExtractor {
    type Output = ExtractionMatch<NumericFinding>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let tokens = tokenize(text);
        let mut results = Vec::new();
        let mut index = 0;

        while index < tokens.len() {
            let Some((amount, next)) = self.parse_amount_at(&tokens, index) else {
                index += 1;
                continue;
            };

            let currency = tokens
                .get(next)
                .filter(|noun| noun.joined)
                .and_then(|noun| lookup_currency_noun(&noun.lower));

            let Some(currency) = currency else {
                index += 1;
                continue;
            };

            let mut cents = None;
            let mut last = next;

            if let Some((value, after)) = self.parse_cents_at(&tokens, next + 1) {
                cents = Some(format!("{:02}", value));
                last = after - 1;
            }

            let Some(value) = parse_amount(&amount, cents.as_deref()) else {
                index += 1;
                continue;
            };

            results.push(money_match(
                value,
                currency,
                MatchPriority::WordCurrency,
                text,
                tokens[index].span.start,
                tokens[last].span.end,
            ));

            index = last + 1;
        }

        results
    }
}

fn money_match(
    value: f64,
    currency: Currency,
    priority: MatchPriority,
    text: &str,
    start: usize,
    end: usize,
) -> ExtractionMatch<NumericFinding> {
    ExtractionMatch::new(
        NumericFinding::money(value, currency.code, currency.symbol, &text[start..end]),
        priority,
        start,
        end,
    )
}

/// Whether the symbol at `start` continues a word ("AR$", "R$" for "$").
fn attached_to_word(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().is_some_and(char::is_alphanumeric)
}

/// Combine digit groups into a value ("1234", Some("56") -> 1234.56).
///
/// Amounts beyond `Decimal` range are still money; they fall back to the
/// nearest `f64`.
fn parse_amount(integer_part: &str, fraction: Option<&str>) -> Option<f64> {
    let amount = match fraction {
        Some(fraction) => format!("{}.{}", integer_part, fraction),
        None => integer_part.to_string(),
    };

    match Decimal::from_str(&amount) {
        Ok(value) => Some(decimal_to_f64(value)),
        Err(e) => {
            debug!("Amount {} exceeds decimal range ({}), using f64", amount, e);
            amount.parse().ok()
        }
    }
}

/// Convert through the decimal string so that 99.99 lands on the f64
/// nearest to 99.99.
fn decimal_to_f64(amount: Decimal) -> f64 {
    amount.to_string().parse().unwrap_or(0.0)
}
