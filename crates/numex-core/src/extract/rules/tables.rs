//! Static normalization tables: number words, currency nouns and units.
//!
//! Every key is lowercase; lookups lowercase their input first. The slices
//! are the data, the lazily built maps are only indexes over them.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::error::TableError;

/// Currency code plus the symbol reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
}

pub const BRL: Currency = Currency { code: "BRL", symbol: "R$" };
pub const USD: Currency = Currency { code: "USD", symbol: "$" };

/// Currency nouns that may follow an amount.
pub static CURRENCY_NOUNS: &[(&str, Currency)] = &[
    ("reais", BRL),
    ("real", BRL),
    ("dólares", USD),
    ("doláres", USD),
    ("dolares", USD),
    ("dólar", USD),
    ("dolar", USD),
];

/// Currency symbols that may precede a digit amount.
pub static CURRENCY_SYMBOLS: &[(&str, Currency)] = &[
    ("r$", BRL),
    ("$", USD),
    ("us$", Currency { code: "USD", symbol: "US$" }),
];

/// Unit nouns and abbreviations mapped to their canonical abbreviation.
pub static MEASURE_UNITS: &[(&str, &str)] = &[
    ("metros", "m"),
    ("metro", "m"),
    ("m", "m"),
    ("quilômetros", "km"),
    ("quilometros", "km"),
    ("quilômetro", "km"),
    ("quilometro", "km"),
    ("km", "km"),
    ("gramas", "g"),
    ("grama", "g"),
    ("g", "g"),
];

/// Nouns closing a fractional-currency clause.
pub static CENTAVOS_NOUNS: &[&str] = &["centavos", "centavo"];

pub static UNIT_WORDS: &[(&str, u32)] = &[
    ("zero", 0),
    ("um", 1),
    ("uma", 1),
    ("dois", 2),
    ("duas", 2),
    ("três", 3),
    ("tres", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
];

pub static TEEN_WORDS: &[(&str, u32)] = &[
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
    ("treze", 13),
    ("catorze", 14),
    ("quatorze", 14),
    ("quinze", 15),
    ("dezesseis", 16),
    ("dezasseis", 16),
    ("dezessete", 17),
    ("dezassete", 17),
    ("dezoito", 18),
    ("dezenove", 19),
    ("dezanove", 19),
];

pub static TEN_WORDS: &[(&str, u32)] = &[
    ("vinte", 20),
    ("trinta", 30),
    ("quarenta", 40),
    ("cinquenta", 50),
    ("cinqüenta", 50),
    ("sessenta", 60),
    ("setenta", 70),
    ("oitenta", 80),
    ("noventa", 90),
];

/// "cem" stands alone; "cento" only appears as "cento e ...".
pub static HUNDRED_WORDS: &[(&str, u32)] = &[
    ("cem", 100),
    ("cento", 100),
    ("duzentos", 200),
    ("duzentas", 200),
    ("trezentos", 300),
    ("trezentas", 300),
    ("quatrocentos", 400),
    ("quatrocentas", 400),
    ("quinhentos", 500),
    ("quinhentas", 500),
    ("seiscentos", 600),
    ("seiscentas", 600),
    ("setecentos", 700),
    ("setecentas", 700),
    ("oitocentos", 800),
    ("oitocentas", 800),
    ("novecentos", 900),
    ("novecentas", 900),
];

lazy_static! {
    static ref CURRENCY_NOUN_INDEX: HashMap<&'static str, Currency> =
        CURRENCY_NOUNS.iter().copied().collect();
    static ref CURRENCY_SYMBOL_INDEX: HashMap<&'static str, Currency> =
        CURRENCY_SYMBOLS.iter().copied().collect();
    static ref MEASURE_UNIT_INDEX: HashMap<&'static str, &'static str> =
        MEASURE_UNITS.iter().copied().collect();
    static ref UNIT_INDEX: HashMap<&'static str, u32> = UNIT_WORDS.iter().copied().collect();
    static ref TEEN_INDEX: HashMap<&'static str, u32> = TEEN_WORDS.iter().copied().collect();
    static ref TEN_INDEX: HashMap<&'static str, u32> = TEN_WORDS.iter().copied().collect();
    static ref HUNDRED_INDEX: HashMap<&'static str, u32> = HUNDRED_WORDS.iter().copied().collect();
}

pub fn lookup_currency_noun(word: &str) -> Option<Currency> {
    CURRENCY_NOUN_INDEX.get(word.to_lowercase().as_str()).copied()
}

pub fn lookup_currency_symbol(symbol: &str) -> Option<Currency> {
    CURRENCY_SYMBOL_INDEX.get(symbol.to_lowercase().as_str()).copied()
}

/// Canonical abbreviation for a unit noun ("metros" -> "m").
pub fn lookup_measure_unit(word: &str) -> Option<&'static str> {
    MEASURE_UNIT_INDEX.get(word.to_lowercase().as_str()).copied()
}

pub fn is_centavos_noun(word: &str) -> bool {
    let word = word.to_lowercase();
    CENTAVOS_NOUNS.iter().any(|noun| *noun == word)
}

pub fn unit_value(word: &str) -> Option<u32> {
    UNIT_INDEX.get(word).copied()
}

pub fn teen_value(word: &str) -> Option<u32> {
    TEEN_INDEX.get(word).copied()
}

pub fn ten_value(word: &str) -> Option<u32> {
    TEN_INDEX.get(word).copied()
}

pub fn hundred_value(word: &str) -> Option<u32> {
    HUNDRED_INDEX.get(word).copied()
}

/// Check every table for malformed entries.
pub fn validate_tables() -> Result<(), TableError> {
    check_keys("CURRENCY_NOUNS", CURRENCY_NOUNS.iter().map(|(k, _)| *k))?;
    check_keys("CURRENCY_SYMBOLS", CURRENCY_SYMBOLS.iter().map(|(k, _)| *k))?;
    check_keys("MEASURE_UNITS", MEASURE_UNITS.iter().map(|(k, _)| *k))?;
    check_keys("CENTAVOS_NOUNS", CENTAVOS_NOUNS.iter().copied())?;

    // Number words share one namespace: a word may not carry two magnitudes.
    check_keys(
        "NUMBER_WORDS",
        UNIT_WORDS
            .iter()
            .chain(TEEN_WORDS)
            .chain(TEN_WORDS)
            .chain(HUNDRED_WORDS)
            .map(|(k, _)| *k),
    )?;

    for (table, entries) in [("CURRENCY_NOUNS", CURRENCY_NOUNS), ("CURRENCY_SYMBOLS", CURRENCY_SYMBOLS)] {
        for (key, currency) in entries {
            if currency.code.is_empty() || currency.symbol.is_empty() {
                return Err(TableError::EmptyCode { table, key: *key });
            }
        }
    }

    for (key, unit) in MEASURE_UNITS {
        if unit.is_empty() {
            return Err(TableError::EmptyCode { table: "MEASURE_UNITS", key: *key });
        }
    }

    Ok(())
}

fn check_keys(
    table: &'static str,
    keys: impl Iterator<Item = &'static str>,
) -> Result<(), TableError> {
    let mut seen = HashSet::new();

    for key in keys {
        if key.is_empty() {
            return Err(TableError::EmptyKey { table });
        }
        if key.to_lowercase() != key {
            return Err(TableError::NotLowercase { table, key });
        }
        if !seen.insert(key) {
            return Err(TableError::DuplicateKey { table, key });
        }
    }

    Ok(())
}
