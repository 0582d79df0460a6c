//! Presentation of an analysis result: what the page renders.

use sentio_domain::sentiment::{PolarityScores, SentimentLabel, SentimentResponse};
use serde::{Deserialize, Serialize};

/// A backend result enriched for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisView {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub scores: PolarityScores,
    /// Marker shown next to the label.
    pub emoji: String,
    /// Capitalized label, e.g. `Positive`.
    pub label: String,
    /// Gauge and metric color.
    pub color: String,
    /// Confidence as a percentage with one decimal, e.g. `85.3%`.
    pub confidence_pct: String,
    pub interpretation: Interpretation,
    pub score_rows: Vec<ScoreRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub headline: String,
    pub body: String,
    /// Alert style: `success`, `error` or `info`.
    pub tone: String,
}

/// One row of the detailed score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub score_type: String,
    /// Raw value with four decimals.
    pub value: String,
    /// Share of the text; compound is rescaled from `[-1, 1]` to `[0, 1]`.
    pub percentage: String,
}

#[must_use]
pub const fn emoji(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "🟢",
        SentimentLabel::Negative => "🔴",
        SentimentLabel::Neutral => "🟡",
    }
}

#[must_use]
pub const fn color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "#00C851",
        SentimentLabel::Negative => "#FF4444",
        SentimentLabel::Neutral => "#FFBB33",
    }
}

/// `0.8531` → `85.3%`.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

#[must_use]
pub fn interpretation(label: SentimentLabel, confidence: f64) -> Interpretation {
    let pct = percent(confidence);
    let (headline, body, tone) = match label {
        SentimentLabel::Positive => (
            "Positive Sentiment Detected",
            format!(
                "The text expresses positive emotions with {pct} confidence. \
                 This indicates satisfaction, happiness, or approval."
            ),
            "success",
        ),
        SentimentLabel::Negative => (
            "Negative Sentiment Detected",
            format!(
                "The text expresses negative emotions with {pct} confidence. \
                 This indicates dissatisfaction, sadness, or disapproval."
            ),
            "error",
        ),
        SentimentLabel::Neutral => (
            "Neutral Sentiment Detected",
            format!(
                "The text appears neutral with {pct} confidence. \
                 This indicates factual, balanced, or indifferent content."
            ),
            "info",
        ),
    };

    Interpretation {
        headline: format!("{headline} {}", emoji(label)),
        body,
        tone: tone.to_owned(),
    }
}

#[must_use]
pub fn score_rows(scores: &PolarityScores) -> Vec<ScoreRow> {
    scores
        .entries()
        .into_iter()
        .map(|(name, value)| {
            let share = if name == "compound" { (value + 1.0) / 2.0 } else { value };
            ScoreRow {
                score_type: title_case(name),
                value: format!("{value:.4}"),
                percentage: percent(share),
            }
        })
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

impl From<SentimentResponse> for AnalysisView {
    fn from(response: SentimentResponse) -> Self {
        let SentimentResponse { text, sentiment, confidence, scores } = response;

        Self {
            emoji: emoji(sentiment).to_owned(),
            label: sentiment.title().to_owned(),
            color: color(sentiment).to_owned(),
            confidence_pct: percent(confidence),
            interpretation: interpretation(sentiment, confidence),
            score_rows: score_rows(&scores),
            text,
            sentiment,
            confidence,
            scores,
        }
    }
}
