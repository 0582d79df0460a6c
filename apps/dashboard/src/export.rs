//! Downloadable snapshots of an analysis.

use crate::error::DashboardError;
use chrono::{DateTime, Local};
use sentio_domain::sentiment::{PolarityScores, SentimentLabel};
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: &str = "Text,Sentiment,Confidence,Positive,Negative,Neutral,Compound,Timestamp";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What the page posts to the export routes: the text as typed plus the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub scores: PolarityScores,
}

/// An export request stamped with the export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub scores: PolarityScores,
    pub timestamp: String,
}

impl ExportRecord {
    #[must_use]
    pub fn stamped(request: ExportRequest, at: DateTime<Local>) -> Self {
        let ExportRequest { text, sentiment, confidence, scores } = request;
        Self { text, sentiment, confidence, scores, timestamp: at.format(TIMESTAMP_FORMAT).to_string() }
    }

    /// Pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Header line plus one row; the text is always quoted.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let Self { text, sentiment, confidence, scores, timestamp } = self;
        format!(
            "{CSV_HEADER}\n\"{}\",{sentiment},{confidence:.4},{:.4},{:.4},{:.4},{:.4},{timestamp}",
            text.replace('"', "\"\""),
            scores.pos,
            scores.neg,
            scores.neu,
            scores.compound,
        )
    }
}

/// `sentiment_analysis_<unix seconds>.<extension>`.
#[must_use]
pub fn file_name(extension: &str, at: DateTime<Local>) -> String {
    format!("sentiment_analysis_{}.{extension}", at.timestamp())
}
