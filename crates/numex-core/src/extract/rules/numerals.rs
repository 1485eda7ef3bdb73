//! Tokenizer and grammar for spelled-out Portuguese numerals.
//!
//! The grammar covers 0..=999:
//!
//! ```text
//! numeral   := "cem" | HUNDRED ["e" tens_part] | tens_part
//! tens_part := TEN ["e" UNIT] | TEEN | UNIT
//! ```
//!
//! "cento" must be followed by `"e" tens_part`; "cem" never is. Only
//! whitespace may separate the words of one numeral.

use crate::models::Span;

use super::tables::{hundred_value, teen_value, ten_value, unit_value};

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of alphabetic characters.
    Word,
    /// A run of ASCII digits, possibly with inner `.` or `,` separators.
    Digits,
}

/// A token with its position in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Text as written.
    pub text: &'a str,
    /// Lowercased text, used for lookups.
    pub lower: String,
    pub span: Span,
    /// Only whitespace separates this token from the previous one.
    pub joined: bool,
}

impl Token<'_> {
    fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.lower == word
    }

    /// Digits without any separator.
    pub fn is_integer(&self) -> bool {
        self.kind == TokenKind::Digits && self.text.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Split text into word and digit tokens; everything else is a boundary.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut last_end: Option<usize> = None;

    while let Some(&(start, c)) = chars.peek() {
        let kind = if c.is_alphabetic() {
            TokenKind::Word
        } else if c.is_ascii_digit() {
            TokenKind::Digits
        } else {
            chars.next();
            continue;
        };

        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            let keep = match kind {
                TokenKind::Word => c.is_alphabetic(),
                TokenKind::Digits => {
                    c.is_ascii_digit()
                        || ((c == '.' || c == ',')
                            && text[i + 1..].starts_with(|n: char| n.is_ascii_digit()))
                }
            };
            if !keep {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        let joined = last_end
            .map(|prev| text[prev..start].chars().all(char::is_whitespace))
            .unwrap_or(false);

        let token_text = &text[start..end];
        tokens.push(Token {
            kind,
            text: token_text,
            lower: token_text.to_lowercase(),
            span: Span::new(start, end),
            joined,
        });
        last_end = Some(end);
    }

    tokens
}

/// Parse the numeral starting at `tokens[index]`.
///
/// Returns the value and the index of the first token after the numeral.
pub fn parse_numeral(tokens: &[Token<'_>], index: usize) -> Option<(u32, usize)> {
    let word = word_at(tokens, index)?;

    if word == "cem" {
        return Some((100, index + 1));
    }

    if let Some(hundreds) = hundred_value(word) {
        if let Some((rest, next)) = conjoined(tokens, index + 1, parse_tens_part) {
            return Some((hundreds + rest, next));
        }
        if word == "cento" {
            return None;
        }
        return Some((hundreds, index + 1));
    }

    parse_tens_part(tokens, index)
}

/// Parse a whole string as a single numeral ("trezentos e cinco" -> 305).
pub fn parse_word_numeral(text: &str) -> Option<u32> {
    let tokens = tokenize(text);
    match parse_numeral(&tokens, 0)? {
        (value, next) if next == tokens.len() => Some(value),
        _ => None,
    }
}

fn parse_tens_part(tokens: &[Token<'_>], index: usize) -> Option<(u32, usize)> {
    let word = word_at(tokens, index)?;

    if let Some(tens) = ten_value(word) {
        if let Some((units, next)) = conjoined(tokens, index + 1, parse_unit) {
            return Some((tens + units, next));
        }
        return Some((tens, index + 1));
    }

    if let Some(teen) = teen_value(word) {
        return Some((teen, index + 1));
    }

    parse_unit(tokens, index)
}

fn parse_unit(tokens: &[Token<'_>], index: usize) -> Option<(u32, usize)> {
    unit_value(word_at(tokens, index)?).map(|value| (value, index + 1))
}

/// Parse `"e" <rule>` at `index`. A zero continuation ("vinte e zero") is
/// not a numeral, so it is rejected and the "e" left unconsumed.
fn conjoined(
    tokens: &[Token<'_>],
    index: usize,
    rule: fn(&[Token<'_>], usize) -> Option<(u32, usize)>,
) -> Option<(u32, usize)> {
    let conjunction = tokens.get(index)?;
    if !conjunction.joined || !conjunction.is_word("e") {
        return None;
    }
    if !tokens.get(index + 1)?.joined {
        return None;
    }

    rule(tokens, index + 1).filter(|(value, _)| *value > 0)
}

fn word_at<'t>(tokens: &'t [Token<'_>], index: usize) -> Option<&'t str> {
    tokens
        .get(index)
        .filter(|t| t.kind == TokenKind::Word)
        .map(|t| t.lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Custa 10.50, vinte  e\tcinco!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["Custa", "10.50", "vinte", "e", "cinco"]);

        let joined: Vec<bool> = tokens.iter().map(|t| t.joined).collect();
        assert_eq!(joined, vec![false, true, false, true, true]);

        assert_eq!(tokens[2].span, Span::new(13, 18));
        assert!(!tokens[1].is_integer());
    }

    #[test]
    fn test_tokenize_accents_and_trailing_separator() {
        let tokens = tokenize("três quilômetros 25.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["três", "quilômetros", "25"]);
        assert!(tokens[2].is_integer());
    }

    #[test]
    fn test_simple_numerals() {
        assert_eq!(parse_word_numeral("zero"), Some(0));
        assert_eq!(parse_word_numeral("dois"), Some(2));
        assert_eq!(parse_word_numeral("Quinze"), Some(15));
        assert_eq!(parse_word_numeral("noventa"), Some(90));
        assert_eq!(parse_word_numeral("cem"), Some(100));
        assert_eq!(parse_word_numeral("novecentas"), Some(900));
    }

    #[test]
    fn test_compound_numerals() {
        assert_eq!(parse_word_numeral("vinte e cinco"), Some(25));
        assert_eq!(parse_word_numeral("cento e um"), Some(101));
        assert_eq!(parse_word_numeral("cento e dezoito"), Some(118));
        assert_eq!(parse_word_numeral("trezentos e cinco"), Some(305));
        assert_eq!(parse_word_numeral("novecentos e noventa e nove"), Some(999));
        assert_eq!(parse_word_numeral("duzentos e quarenta"), Some(240));
    }

    #[test]
    fn test_invalid_numerals() {
        assert_eq!(parse_word_numeral("cento"), None);
        assert_eq!(parse_word_numeral("cem e um"), None);
        assert_eq!(parse_word_numeral("dois três"), None);
        assert_eq!(parse_word_numeral("vinte e zero"), None);
        assert_eq!(parse_word_numeral("dez e um"), None);
        assert_eq!(parse_word_numeral("mil"), None);
        assert_eq!(parse_word_numeral("vinte, e cinco"), None);
        assert_eq!(parse_word_numeral(""), None);
    }

    #[test]
    fn test_conjunction_not_consumed_without_continuation() {
        let tokens = tokenize("vinte e sophia");
        assert_eq!(parse_numeral(&tokens, 0), Some((20, 1)));

        let tokens = tokenize("trezentos e cinco metros");
        assert_eq!(parse_numeral(&tokens, 0), Some((305, 3)));
    }

    #[test]
    fn test_unit_words_do_not_merge() {
        let tokens = tokenize("dois três");
        assert_eq!(parse_numeral(&tokens, 0), Some((2, 1)));
        assert_eq!(parse_numeral(&tokens, 1), Some((3, 2)));
    }

    #[test]
    fn test_digits_are_not_numerals() {
        let tokens = tokenize("25 metros");
        assert_eq!(parse_numeral(&tokens, 0), None);
    }
}
