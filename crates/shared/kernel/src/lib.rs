//! Kernel utilities shared by the apps and the feature slices.
//!
//! * [`config::load_config`]: TOML file plus `SENTIO__` environment overrides.
//! * [`logging::init_logging`]: maps a `[logging]` section onto `sentio-logger`.
//! * `server` (feature `server`): API state, error responses, the JSON
//!   extractor and the liveness/health routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use sentio_kernel::config::load_config;
//! use sentio_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>, "config/server").unwrap();
//! assert_eq!(cfg.server.port, 8000);
//! ```
pub mod config;
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

pub use sentio_domain as domain;
