//! Regex patterns for digit-form values.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // BRL: dot groups thousands, comma starts the cents (R$ 1.234,56)
    pub static ref BRL_AMOUNT: Regex = Regex::new(
        r"(?i)(R\$)\s*([0-9]{1,3}(?:\.[0-9]{3})+|[0-9]+)(?:,([0-9]+))?"
    ).unwrap();

    // USD: comma groups thousands, dot starts the cents ($1,234.56)
    pub static ref USD_AMOUNT: Regex = Regex::new(
        r"(?i)(US\$|\$)\s*([0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.([0-9]+))?"
    ).unwrap();

    // Number followed by a word that may be a unit (25 metros, 3.5km)
    pub static ref MEASURE_DIGITS: Regex = Regex::new(
        r"\b([0-9]+(?:\.[0-9]+)?)\s*(\p{L}+)\b"
    ).unwrap();

    // Number not embedded in a word; a comma is a boundary, not a separator.
    // Greedy digits leave no digit after the match, while a trailing letter is
    // allowed so that "5kg" still yields 5.
    pub static ref PLAIN_NUMBER: Regex = Regex::new(
        r"\b[0-9]+(?:\.[0-9]+)?"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brl_pattern() {
        let caps = BRL_AMOUNT.captures("por R$ 1.234,56 hoje").unwrap();
        assert_eq!(&caps[0], "R$ 1.234,56");
        assert_eq!(&caps[2], "1.234");
        assert_eq!(&caps[3], "56");

        let caps = BRL_AMOUNT.captures("R$99").unwrap();
        assert_eq!(&caps[0], "R$99");
        assert!(caps.get(3).is_none());
    }

    #[test]
    fn test_usd_pattern() {
        let caps = USD_AMOUNT.captures("Gastou $10.50 no").unwrap();
        assert_eq!(&caps[0], "$10.50");

        let caps = USD_AMOUNT.captures("US$ 1,500.00").unwrap();
        assert_eq!(&caps[1], "US$");
        assert_eq!(&caps[2], "1,500");
    }

    #[test]
    fn test_plain_number_stops_at_comma() {
        let found: Vec<&str> = PLAIN_NUMBER.find_iter("1,5 e 2.75").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["1", "5", "2.75"]);
    }

    #[test]
    fn test_plain_number_ignores_embedded_digits() {
        assert!(PLAIN_NUMBER.find("abc123").is_none());
    }

    #[test]
    fn test_plain_number_before_unknown_unit() {
        let found: Vec<&str> = PLAIN_NUMBER.find_iter("5kg e 2.5lb").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["5", "2.5"]);
    }
}
