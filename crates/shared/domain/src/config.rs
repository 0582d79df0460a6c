use crate::constants::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration of the API server (`config/server.toml`).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// Arc-wrapped so handlers and slices can clone it freely.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Configuration of the dashboard (`config/dashboard.toml`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfigInner {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
    /// Free-form label shown in the debug panel.
    pub environment: String,
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(flatten, default)]
    inner: Arc<DashboardConfigInner>,
}

impl Deref for DashboardConfig {
    type Target = DashboardConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DashboardConfig {
    fn deref_mut(&mut self) -> &mut DashboardConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

impl ServerConfig {
    /// Listener on all interfaces at `port`.
    #[must_use]
    pub const fn on_port(port: u16) -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port, ssl: None }
    }
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Cross-origin policy of the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any.
    pub allowed_origins: Vec<String>,
    pub max_age_secs: u64,
}

impl CorsConfig {
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Compound-score cut-offs for labelling.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

/// How the dashboard reaches the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: String,
    pub docs_url: String,
    pub timeout_secs: u64,
    pub health_timeout_secs: u64,
    pub retries: u32,
    pub backoff_factor: f64,
    pub health_ttl_secs: u64,
}

/// Log output of a binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace`..`error`); `RUST_LOG` still wins unless `filter` is set.
    pub level: String,
    /// Explicit filter directives, e.g. `sentio=debug,tower_http=info`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
    /// JSON records in the log files.
    pub json: bool,
    pub ansi: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self::on_port(8000)
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: vec!["*".to_owned()], max_age_secs: 3600 }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { positive_threshold: POSITIVE_THRESHOLD, negative_threshold: NEGATIVE_THRESHOLD }
    }
}

impl Default for DashboardConfigInner {
    fn default() -> Self {
        Self {
            server: ServerConfig::on_port(8501),
            backend: BackendConfig::default(),
            logging: LoggingConfig::default(),
            environment: "development".to_owned(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_owned(),
            docs_url: "http://localhost:8000/docs".to_owned(),
            timeout_secs: 10,
            health_timeout_secs: 5,
            retries: 5,
            backoff_factor: 0.3,
            health_ttl_secs: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, path: None, json: false, ansi: true }
    }
}
