//! Wire models of the sentiment API.

use sentio_derive::api_model;
use std::fmt;

/// Overall polarity of a text.
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Capitalized name for display.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// VADER polarity intensities.
///
/// `neg`, `neu` and `pos` are proportions in `[0, 1]` that sum to about 1;
/// `compound` is the normalized valence in `[-1, 1]`.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// `(name, value)` pairs in the order the dashboard tabulates them.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, f64); 4] {
        [("neg", self.neg), ("neu", self.neu), ("pos", self.pos), ("compound", self.compound)]
    }
}

/// Body of `POST /analyze`.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct TweetRequest {
    #[cfg_attr(feature = "server", schema(example = "I love this new product! It's amazing!"))]
    pub text: String,
}

impl TweetRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Result of `POST /analyze`.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq)]
pub struct SentimentResponse {
    /// The submitted text, as received.
    pub text: String,
    pub sentiment: SentimentLabel,
    /// Absolute compound score.
    pub confidence: f64,
    pub scores: PolarityScores,
}

/// Error payload shared by every failing route.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
