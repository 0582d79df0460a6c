use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sentio_domain::constants::INTERNAL_ERROR_DETAIL;
use sentio_domain::sentiment::ErrorBody;
use std::borrow::Cow;
use tracing::{debug, error};

/// Error returned by API handlers, rendered as `{"detail": "..."}`.
///
/// Only `message` reaches the client; `context` is kept for the logs.
#[sentio_derive::sentio_error]
pub enum ApiError {
    /// 400: the request is well-formed but its content is unusable.
    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// 422: the body could not be decoded into the expected model.
    #[error("Unprocessable request{}: {message}", format_context(.context))]
    Unprocessable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// 500: the server failed while handling a valid request.
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest { message: message.into(), context: None }
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Internal { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unprocessable { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    /// The generic 500 used when nothing more specific is known.
    #[must_use]
    pub fn fallback_response() -> Response {
        Self::internal(INTERNAL_ERROR_DETAIL).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unprocessable { message: rejection.body_text().into(), context: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(ErrorBody::new(self.detail()))).into_response()
    }
}
