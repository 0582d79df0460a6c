use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sentio_domain::sentiment::ErrorBody;
use std::borrow::Cow;
use tracing::{debug, warn};

/// A specialized [`DashboardError`] enum of this crate.
///
/// Rendered as `{"detail": message}`; the page shows `detail` verbatim.
#[sentio_derive::sentio_error]
pub enum DashboardError {
    /// The backend health probe failed (503).
    #[error("Backend offline{}: {message}", format_context(.context))]
    Offline { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The text failed local validation (400).
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The backend answered 400; `message` is its `detail` (400).
    #[error("Rejected by backend{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The backend was unreachable or answered with an unexpected status (502).
    #[error("Bad gateway{}: {message}", format_context(.context))]
    BadGateway { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The backend did not answer in time (504).
    #[error("Gateway timeout{}: {message}", format_context(.context))]
    Timeout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Export serialization failed (500).
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Client construction or other unexpected failure (500).
    #[error("Internal dashboard error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DashboardError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Offline { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidInput { .. } | Self::Rejected { .. } => StatusCode::BAD_REQUEST,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Serialization { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the user.
    #[must_use]
    pub fn detail(&self) -> Cow<'_, str> {
        match self {
            Self::Offline { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Rejected { message, .. }
            | Self::BadGateway { message, .. }
            | Self::Timeout { message, .. }
            | Self::Internal { message, .. } => Cow::Borrowed(message),
            Self::Serialization { source, .. } => Cow::Owned(format!("Export failed: {source}")),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, status = status.as_u16(), "Dashboard request failed");
        } else {
            debug!(error = %self, "Dashboard request rejected");
        }

        (status, Json(ErrorBody::new(self.detail()))).into_response()
    }
}
