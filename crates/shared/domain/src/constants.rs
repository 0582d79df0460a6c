/// `OpenAPI` tag of the liveness and health routes.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag of the sentiment routes.
pub const ANALYSIS_TAG: &str = "Analysis";

/// Service name reported by `GET /health`.
pub const SERVICE_NAME: &str = "sentiment-analysis-api";
/// Greeting reported by `GET /`.
pub const API_TITLE: &str = "Tweet Sentiment Analysis API";
pub const HEALTHY: &str = "healthy";

/// Twitter's character limit, enforced by the dashboard.
pub const TWEET_MAX_CHARS: usize = 280;

/// Compound score at or above which text is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

pub const EMPTY_TEXT_DETAIL: &str = "Tweet text cannot be empty";
pub const SCORING_FAILED_DETAIL: &str = "Error analyzing sentiment";
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Environment prefix for configuration overrides (`SENTIO__SERVER__PORT`).
pub const ENV_PREFIX: &str = "SENTIO";
