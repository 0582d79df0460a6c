use std::borrow::Cow;

/// A specialized [`AnalysisError`] enum of this crate.
#[sentio_derive::sentio_error]
pub enum AnalysisError {
    /// The text is empty once surrounding whitespace is removed.
    #[error("Empty text{}: {message}", format_context(.context))]
    EmptyText { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The scorer failed or produced an unusable result.
    #[error("Scoring error{}: {message}", format_context(.context))]
    Scoring { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Invalid thresholds{}: {message}", format_context(.context))]
    InvalidThresholds { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal analysis error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl AnalysisError {
    pub(crate) fn scoring(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Scoring { message: message.into(), context: None }
    }
}

#[cfg(feature = "server")]
impl From<AnalysisError> for sentio_kernel::server::ApiError {
    fn from(err: AnalysisError) -> Self {
        use sentio_domain::constants::{EMPTY_TEXT_DETAIL, INTERNAL_ERROR_DETAIL, SCORING_FAILED_DETAIL};

        let (detail, context) = match err {
            AnalysisError::EmptyText { .. } => return Self::bad_request(EMPTY_TEXT_DETAIL),
            AnalysisError::Scoring { message, .. } => (SCORING_FAILED_DETAIL, message),
            AnalysisError::InvalidThresholds { message, .. } | AnalysisError::Internal { message, .. } => {
                (INTERNAL_ERROR_DETAIL, message)
            },
        };

        Self::Internal { message: detail.into(), context: Some(context) }
    }
}
