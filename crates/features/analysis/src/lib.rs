//! Sentiment analysis feature slice: VADER scoring and threshold labelling.

mod classifier;
mod error;
mod scorer;
#[cfg(feature = "server")]
mod server;

pub use crate::classifier::{Analyzer, Thresholds};
pub use crate::error::{AnalysisError, AnalysisErrorExt};
pub use crate::scorer::{PolarityScorer, VaderScorer};
#[cfg(feature = "server")]
pub use crate::server::analysis_router;

use sentio_kernel::domain::config::ApiConfig;
use sentio_kernel::domain::registry::InitializedSlice;

/// Analysis feature state
#[sentio_derive::sentio_slice]
pub struct Analysis {
    pub analyzer: Analyzer,
}

/// Initialize the analysis feature with the VADER scorer.
///
/// # Errors
/// Fails when the configured thresholds are invalid.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, AnalysisError> {
    init_with(config, VaderScorer)
}

/// Initialize the analysis feature with a custom scorer.
///
/// # Errors
/// Fails when the configured thresholds are invalid.
pub fn init_with(config: &ApiConfig, scorer: impl PolarityScorer) -> Result<InitializedSlice, AnalysisError> {
    let thresholds = Thresholds::from(config.analysis);
    let analyzer = Analyzer::new(scorer, thresholds).context("analysis.thresholds")?;

    tracing::info!(
        positive = thresholds.positive,
        negative = thresholds.negative,
        "Analysis slice initialized"
    );

    Ok(InitializedSlice::new(Analysis::new(AnalysisInner { analyzer })))
}
