use config::{Config, Environment, File, Map};
use sentio_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Error type for config loading.
#[sentio_derive::sentio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration in two layers:
///
/// 1. **File**: `path` if given (must exist), otherwise `fallback` (optional,
///    so a bare binary runs on defaults). The extension may be omitted.
/// 2. **Environment**: variables prefixed with `SENTIO__`, nested with `__`
///    (`SENTIO__SERVER__PORT=9000` sets `server.port`). Values are parsed as
///    numbers/booleans where possible; `cors.allowed_origins` accepts a
///    comma-separated list.
///
/// # Errors
/// Fails if an explicit file is missing, a source is malformed, or the merged
/// document does not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use sentio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local"), "config/server").unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>, fallback: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, fallback, None)
}

/// [`load_config`] reading overrides from `vars` instead of the process
/// environment when given. Keys keep the `SENTIO__` prefix.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    fallback: impl AsRef<Path>,
    vars: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = match &path {
        Some(explicit) => (explicit.as_ref(), true),
        None => (fallback.as_ref(), false),
    };

    debug!(path = %file.display(), required, "Loading configuration");

    Config::builder()
        .add_source(File::from(file).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .source(vars),
        )
        .build()
        .context(format!("Failed to read {}", file.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
