use crate::error::AnalysisError;
use sentio_domain::sentiment::PolarityScores;
use std::collections::HashMap;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Maps text to polarity intensities.
pub trait PolarityScorer: Debug + Send + Sync + 'static {
    /// # Errors
    /// Returns [`AnalysisError::Scoring`] when no usable scores can be produced.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalysisError>;
}

/// Lexicon and rule based scorer (VADER).
///
/// The lexicon is parsed once by `vader_sentiment`; an analyzer only borrows
/// it, so one is built per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaderScorer;

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalysisError> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            let analyzer = SentimentIntensityAnalyzer::new();
            let raw = analyzer.polarity_scores(text);
            to_scores(&raw)
        }))
        .map_err(|_| AnalysisError::scoring("VADER analyzer panicked"))?
    }
}

fn to_scores(raw: &HashMap<&str, f64>) -> Result<PolarityScores, AnalysisError> {
    let score = |key: &'static str| {
        raw.get(key)
            .copied()
            .filter(|value| value.is_finite())
            .ok_or_else(|| AnalysisError::scoring(format!("missing or non-finite '{key}' score")))
    };

    let (neg, neu, pos) = (score("neg")?, score("neu")?, score("pos")?);
    // `vader_sentiment` subtracts punctuation emphasis from a zero valence sum,
    // so text with no lexicon hits must stay at compound 0.
    let compound = if pos == 0.0 && neg == 0.0 { 0.0 } else { score("compound")? };

    Ok(PolarityScores { neg, neu, pos, compound })
}
