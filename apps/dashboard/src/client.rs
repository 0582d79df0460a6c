use crate::error::DashboardError;
use moka::sync::Cache;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use sentio_domain::config::BackendConfig;
use sentio_domain::sentiment::{ErrorBody, SentimentResponse, TweetRequest};
use std::time::Duration;
use tracing::{debug, warn};

/// Statuses retried for idempotent requests.
const RETRY_STATUSES: [StatusCode; 4] = [
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Retry budget and exponential backoff.
///
/// The n-th retry waits `backoff_factor * 2^(n-1)` seconds, except the first
/// which is immediate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub backoff_factor: f64,
}

impl RetryPolicy {
    #[must_use]
    pub fn delay(&self, retry: u32) -> Duration {
        if retry <= 1 || self.backoff_factor <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(retry - 1).unwrap_or(i32::MAX);
        let secs = self.backoff_factor * 2f64.powi(exponent);
        Duration::try_from_secs_f64(secs).map_or(MAX_BACKOFF, |delay| delay.min(MAX_BACKOFF))
    }
}

impl From<&BackendConfig> for RetryPolicy {
    fn from(cfg: &BackendConfig) -> Self {
        Self { retries: cfg.retries, backoff_factor: cfg.backoff_factor }
    }
}

/// HTTP client of the sentiment API.
///
/// Connection failures are retried for every request; 500/502/503/504 only
/// for GET. The health verdict is cached for `health_ttl_secs`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    policy: RetryPolicy,
    timeout: Duration,
    health_timeout: Duration,
    health: Cache<(), bool>,
}

impl BackendClient {
    /// # Errors
    /// Fails if the TLS backend of `reqwest` cannot be initialized.
    pub fn new(cfg: &BackendConfig) -> Result<Self, DashboardError> {
        let http = Client::builder()
            .user_agent(concat!("sentio-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DashboardError::Internal {
                message: "Failed to build HTTP client".into(),
                context: Some(e.to_string().into()),
            })?;

        let health = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(cfg.health_ttl_secs))
            .build();

        Ok(Self {
            http,
            base_url: cfg.url.trim_end_matches('/').to_owned(),
            policy: RetryPolicy::from(cfg),
            timeout: Duration::from_secs(cfg.timeout_secs),
            health_timeout: Duration::from_secs(cfg.health_timeout_secs),
            health,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Whether `GET /health` answers 200, cached for the configured TTL.
    pub async fn is_online(&self) -> bool {
        if let Some(online) = self.health.get(&()) {
            return online;
        }

        let online = self.probe_health().await;
        self.health.insert((), online);
        online
    }

    /// Drops the cached health verdict.
    pub fn invalidate_health(&self) {
        self.health.invalidate(&());
    }

    async fn probe_health(&self) -> bool {
        let url = self.url("/health");
        match self.send(Method::GET, || self.http.get(&url).timeout(self.health_timeout)).await {
            Ok(response) => {
                let online = response.status() == StatusCode::OK;
                debug!(status = response.status().as_u16(), online, "Backend health probed");
                online
            },
            Err(e) => {
                debug!(error = %e, "Backend health probe failed");
                false
            },
        }
    }

    /// Sends `text` to `POST /analyze`.
    ///
    /// # Errors
    /// * [`DashboardError::Rejected`] with the backend's `detail` on 400.
    /// * [`DashboardError::BadGateway`] on other statuses, connection failures
    ///   or an unreadable body.
    /// * [`DashboardError::Timeout`] when the request times out.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResponse, DashboardError> {
        let url = self.url("/analyze");
        let payload = TweetRequest::new(text);

        let response = self
            .send(Method::POST, || self.http.post(&url).json(&payload).timeout(self.timeout))
            .await
            .map_err(|e| self.transport_error(&e))?;

        match response.status() {
            StatusCode::OK => response.json::<SentimentResponse>().await.map_err(|e| {
                DashboardError::BadGateway {
                    message: "Backend returned an unreadable response".into(),
                    context: Some(e.to_string().into()),
                }
            }),
            StatusCode::BAD_REQUEST => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .map_or_else(|_| "Bad request".to_owned(), |body| body.detail);
                Err(DashboardError::Rejected { message: detail.into(), context: None })
            },
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(DashboardError::BadGateway {
                    message: format!("Backend error: {} - {body}", status.as_u16()).into(),
                    context: None,
                })
            },
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends the request built by `build`, retrying per [`RetryPolicy`].
    async fn send<F>(&self, method: Method, build: F) -> Result<Response, reqwest::Error>
    where
        F: Fn() -> RequestBuilder,
    {
        let idempotent = method == Method::GET;
        let mut retry = 0;

        loop {
            let outcome = build().send().await;

            let retryable = match &outcome {
                Ok(response) => idempotent && RETRY_STATUSES.contains(&response.status()),
                Err(e) => e.is_connect(),
            };
            if !retryable || retry >= self.policy.retries {
                return outcome;
            }

            retry += 1;
            let delay = self.policy.delay(retry);
            warn!(%method, retry, delay_ms = delay.as_millis(), "Retrying backend request");
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    fn transport_error(&self, e: &reqwest::Error) -> DashboardError {
        if e.is_timeout() {
            DashboardError::Timeout { message: "Request timed out".into(), context: None }
        } else if e.is_connect() {
            DashboardError::BadGateway {
                message: format!("Cannot connect to backend service at {}", self.base_url).into(),
                context: Some(e.to_string().into()),
            }
        } else {
            DashboardError::BadGateway {
                message: format!("Unexpected error: {e}").into(),
                context: None,
            }
        }
    }
}
