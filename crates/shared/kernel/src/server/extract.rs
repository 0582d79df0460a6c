use super::error::ApiError;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `axum::Json` whose rejections render as [`ApiError::Unprocessable`].
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
