//! Numeric finding model.

use serde::{Deserialize, Serialize};

/// Classification of a numeric finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumericKind {
    /// A bare number ("123").
    Number,
    /// A number with a physical unit ("25 metros").
    Measure,
    /// A currency amount ("R$ 99,99", "vinte reais").
    Money,
}

impl NumericKind {
    /// All kinds, in serialization order.
    pub const ALL: [NumericKind; 3] = [NumericKind::Number, NumericKind::Measure, NumericKind::Money];

    /// Parse a kind from its entity name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "NUMBER" => Some(NumericKind::Number),
            "MEASURE" => Some(NumericKind::Measure),
            "MONEY" => Some(NumericKind::Money),
            _ => None,
        }
    }

    /// Entity name as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericKind::Number => "NUMBER",
            NumericKind::Measure => "MEASURE",
            NumericKind::Money => "MONEY",
        }
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One numeric value found in a text.
///
/// `unit` and `symbol` follow the kind: a `Number` has neither, a `Measure`
/// has a unit, a `Money` has both a currency code and a symbol. The
/// constructors are the only way this crate builds findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFinding {
    /// Canonical numeric value.
    pub value: f64,

    /// Finding classification.
    #[serde(rename = "type")]
    pub kind: NumericKind,

    /// Physical unit ("m", "km", "g") or currency code ("BRL", "USD").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Currency symbol ("R$", "$").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Exact substring of the input that produced this finding.
    pub source: String,
}

impl NumericFinding {
    pub fn number(value: f64, source: impl Into<String>) -> Self {
        Self {
            value,
            kind: NumericKind::Number,
            unit: None,
            symbol: None,
            source: source.into(),
        }
    }

    pub fn measure(value: f64, unit: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            value,
            kind: NumericKind::Measure,
            unit: Some(unit.into()),
            symbol: None,
            source: source.into(),
        }
    }

    pub fn money(
        value: f64,
        currency: impl Into<String>,
        symbol: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            value,
            kind: NumericKind::Money,
            unit: Some(currency.into()),
            symbol: Some(symbol.into()),
            source: source.into(),
        }
    }
}

/// Half-open byte range of a match within the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether two spans share at least one byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(NumericKind::from_str("MONEY"), Some(NumericKind::Money));
        assert_eq!(NumericKind::from_str(" measure "), Some(NumericKind::Measure));
        assert_eq!(NumericKind::from_str("Number"), Some(NumericKind::Number));
        assert_eq!(NumericKind::from_str("PERSON"), None);
        assert_eq!(NumericKind::from_str("FAILED"), None);
    }

    #[test]
    fn test_finding_serialization() {
        let finding = NumericFinding::money(99.99, "BRL", "R$", "R$ 99,99");
        let json = serde_json::to_value(&finding).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "value": 99.99,
                "type": "MONEY",
                "unit": "BRL",
                "symbol": "R$",
                "source": "R$ 99,99"
            })
        );
    }

    #[test]
    fn test_number_omits_unit_and_symbol() {
        let finding = NumericFinding::number(123.0, "123");
        let json = serde_json::to_string(&finding).unwrap();

        assert_eq!(json, r#"{"value":123.0,"type":"NUMBER","source":"123"}"#);
    }

    #[test]
    fn test_finding_roundtrip_from_wire() {
        let finding: NumericFinding =
            serde_json::from_str(r#"{"value":25.0,"type":"MEASURE","unit":"m","source":"25 metros"}"#)
                .unwrap();

        assert_eq!(finding, NumericFinding::measure(25.0, "m", "25 metros"));
    }

    #[test]
    fn test_span_overlap() {
        let a = Span::new(0, 5);
        assert!(a.overlaps(&Span::new(4, 8)));
        assert!(!a.overlaps(&Span::new(5, 8)));
        assert!(Span::new(2, 3).overlaps(&a));
        assert_eq!(a.len(), 5);
    }
}
