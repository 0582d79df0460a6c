use crate::Analysis;
use axum::extract::State;
use sentio_derive::api_handler;
use sentio_domain::constants::{ANALYSIS_TAG, INTERNAL_ERROR_DETAIL};
use sentio_domain::sentiment::{ErrorBody, SentimentResponse, TweetRequest};
use sentio_kernel::server::{ApiError, ApiJson, ApiState};
use tracing::info;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

const LOG_PREVIEW_CHARS: usize = 50;

#[api_handler(
    post,
    path = "/analyze",
    request_body = TweetRequest,
    responses(
        (status = OK, description = "Sentiment of the text", body = SentimentResponse),
        (status = BAD_REQUEST, description = "Empty or whitespace-only text", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed body", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Scoring failed", body = ErrorBody),
    ),
    tag = ANALYSIS_TAG,
)]
pub(crate) async fn analyze_handler(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<TweetRequest>,
) -> Result<ApiJson<SentimentResponse>, ApiError> {
    let analysis = state.try_get_slice::<Analysis>().map_err(|e| ApiError::Internal {
        message: INTERNAL_ERROR_DETAIL.into(),
        context: Some(e.to_string().into()),
    })?;

    let response = analysis.analyzer.analyze(&request.text)?;

    let preview: String = request.text.chars().take(LOG_PREVIEW_CHARS).collect();
    info!(
        sentiment = %response.sentiment,
        confidence = response.confidence,
        "Analyzed sentiment for text: {preview}..."
    );

    Ok(ApiJson(response))
}

/// `POST /analyze`. Needs the [`Analysis`] slice registered in the state.
pub fn analysis_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(analyze_handler))
}
