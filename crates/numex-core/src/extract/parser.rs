//! Ordered matcher pipeline with span-conflict resolution.

use tracing::{debug, trace};

use crate::models::{ExtractionConfig, NumericFinding, NumericKind};

use super::rules::{
    DigitCurrencyExtractor, DigitMeasureExtractor, ExtractionMatch, FieldExtractor,
    PlainNumberExtractor, WordCurrencyExtractor, WordMeasureExtractor,
};

type Matcher = Box<dyn FieldExtractor<Output = ExtractionMatch<NumericFinding>>>;

/// Numeric value extractor.
///
/// Holds only immutable options, so one instance can be shared across
/// threads and reused for any number of texts.
#[derive(Debug, Clone)]
pub struct NumericExtractor {
    /// Kinds to report; empty means all.
    kinds: Vec<NumericKind>,
    /// Whether spelled-out numerals are recognized.
    word_numerals: bool,
}

impl NumericExtractor {
    /// Create an extractor reporting every kind, word numerals included.
    pub fn new() -> Self {
        Self {
            kinds: Vec::new(),
            word_numerals: true,
        }
    }

    /// Build an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_kinds(&config.kinds)
            .with_word_numerals(config.word_numerals)
    }

    /// Restrict the reported kinds. An empty slice reports all kinds.
    pub fn with_kinds(mut self, kinds: &[NumericKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    /// Enable or disable spelled-out numerals.
    pub fn with_word_numerals(mut self, enabled: bool) -> Self {
        self.word_numerals = enabled;
        self
    }

    /// Matchers in priority order.
    fn matchers(&self) -> Vec<Matcher> {
        let mut matchers: Vec<Matcher> = vec![
            Box::new(DigitCurrencyExtractor::new()),
            Box::new(WordCurrencyExtractor::new().with_word_numerals(self.word_numerals)),
            Box::new(DigitMeasureExtractor::new()),
        ];

        if self.word_numerals {
            matchers.push(Box::new(WordMeasureExtractor::new()));
        }

        matchers.push(Box::new(PlainNumberExtractor::new()));
        matchers
    }

    fn accepts(&self, kind: NumericKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }

    /// Extract findings together with their priority and byte span.
    ///
    /// The kind filter runs after overlap resolution: a money amount that
    /// is filtered out still hides the plain numbers inside it.
    pub fn extract_matches(&self, text: &str) -> Vec<ExtractionMatch<NumericFinding>> {
        if text.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<_> = self
            .matchers()
            .iter()
            .flat_map(|matcher| matcher.extract_all(text))
            .collect();
        let candidate_count = candidates.len();

        let results: Vec<_> = resolve_overlaps(candidates)
            .into_iter()
            .filter(|m| self.accepts(m.value.kind))
            .collect();

        debug!(
            "Extracted {} findings from {} candidates in {} bytes of text",
            results.len(),
            candidate_count,
            text.len()
        );

        results
    }

    /// Extract findings in text order.
    pub fn extract(&self, text: &str) -> Vec<NumericFinding> {
        self.extract_matches(text)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }
}

impl Default for NumericExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the strongest non-overlapping candidates.
///
/// Candidates are ranked by priority, then earliest start, then longest
/// span; each one is kept unless it overlaps a better-ranked one. The
/// survivors are returned in text order.
pub fn resolve_overlaps(
    mut candidates: Vec<ExtractionMatch<NumericFinding>>,
) -> Vec<ExtractionMatch<NumericFinding>> {
    candidates.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(a.position.start.cmp(&b.position.start))
            .then(b.position.len().cmp(&a.position.len()))
    });

    let mut kept: Vec<ExtractionMatch<NumericFinding>> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if let Some(winner) = kept.iter().find(|k| k.position.overlaps(&candidate.position)) {
            trace!(
                "Dropping {:?} {:?} in favour of {:?} {:?}",
                candidate.priority,
                candidate.value.source,
                winner.priority,
                winner.value.source
            );
            continue;
        }
        kept.push(candidate);
    }

    kept.sort_by_key(|m| m.position.start);
    kept
}
