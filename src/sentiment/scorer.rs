//! Sentiment scorer module
//!
//! Thin wrapper around the `vader_sentiment` analyzer. The analyzer is
//! lexicon-based and stateless: one instance is built at startup and shared
//! by every in-flight request without locking.

use std::fmt;

use vader_sentiment::SentimentIntensityAnalyzer;

/// Polarity scores for a single piece of text.
///
/// `positive`, `negative` and `neutral` are fractions in [0, 1] that sum to
/// roughly 1. `compound` is the normalized composite in [-1, 1] used for
/// classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

/// The analyzer returned an incomplete score set.
///
/// Scoring is local and deterministic, so this only fires if the underlying
/// lexicon analyzer changes its output contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreError {
    missing_key: &'static str,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scorer returned no '{}' score", self.missing_key)
    }
}

impl std::error::Error for ScoreError {}

/// Process-wide sentiment scorer.
pub struct Scorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Scorer {
    /// Build the scorer. Loads the VADER lexicon once.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score a piece of text.
    ///
    /// Deterministic for identical input; safe to call concurrently.
    pub fn polarity_scores(&self, text: &str) -> Result<SentimentScores, ScoreError> {
        let raw = self.analyzer.polarity_scores(text);

        let get = |key: &'static str| {
            raw.get(key)
                .copied()
                .ok_or(ScoreError { missing_key: key })
        };

        Ok(SentimentScores {
            positive: get("pos")?,
            negative: get("neg")?,
            neutral: get("neu")?,
            compound: get("compound")?,
        })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}
