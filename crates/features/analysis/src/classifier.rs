use crate::error::AnalysisError;
use crate::scorer::{PolarityScorer, VaderScorer};
use sentio_domain::config::AnalysisConfig;
use sentio_domain::constants::{EMPTY_TEXT_DETAIL, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use sentio_domain::sentiment::{SentimentLabel, SentimentResponse};
use std::sync::Arc;

/// Compound-score cut-offs. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { positive: POSITIVE_THRESHOLD, negative: NEGATIVE_THRESHOLD }
    }
}

impl From<AnalysisConfig> for Thresholds {
    fn from(cfg: AnalysisConfig) -> Self {
        Self { positive: cfg.positive_threshold, negative: cfg.negative_threshold }
    }
}

impl Thresholds {
    /// Both bounds must be finite, inside `[-1, 1]`, and `negative <= positive`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidThresholds`] otherwise.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let Self { positive, negative } = *self;
        let in_range = |value: f64| value.is_finite() && (-1.0..=1.0).contains(&value);

        if !in_range(positive) || !in_range(negative) {
            return Err(AnalysisError::InvalidThresholds {
                message: format!("thresholds must lie in [-1, 1], got {negative}..{positive}").into(),
                context: None,
            });
        }
        if negative > positive {
            return Err(AnalysisError::InvalidThresholds {
                message: format!("negative threshold {negative} exceeds positive {positive}").into(),
                context: None,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn classify(&self, compound: f64) -> SentimentLabel {
        if compound >= self.positive {
            SentimentLabel::Positive
        } else if compound <= self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Validates text, scores it and labels the result.
#[derive(Debug, Clone)]
pub struct Analyzer {
    scorer: Arc<dyn PolarityScorer>,
    thresholds: Thresholds,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self { scorer: Arc::new(VaderScorer), thresholds: Thresholds::default() }
    }
}

impl Analyzer {
    /// # Errors
    /// Fails when `thresholds` do not validate.
    pub fn new(scorer: impl PolarityScorer, thresholds: Thresholds) -> Result<Self, AnalysisError> {
        thresholds.validate()?;
        Ok(Self { scorer: Arc::new(scorer), thresholds })
    }

    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Scores the trimmed `text`; the response echoes `text` unchanged.
    ///
    /// # Errors
    /// * [`AnalysisError::EmptyText`] for empty or whitespace-only text.
    /// * Any scorer failure.
    pub fn analyze(&self, text: &str) -> Result<SentimentResponse, AnalysisError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::EmptyText { message: EMPTY_TEXT_DETAIL.into(), context: None });
        }

        let scores = self.scorer.polarity_scores(trimmed)?;

        Ok(SentimentResponse {
            text: text.to_owned(),
            sentiment: self.thresholds.classify(scores.compound),
            confidence: scores.compound.abs().clamp(0.0, 1.0),
            scores,
        })
    }
}
