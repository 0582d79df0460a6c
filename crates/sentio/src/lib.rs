//! Facade crate for the Sentio features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//!
//! ## Usage
//! - Add `sentio` with the `server` feature for the API binary.
//! - Call [`init`] to build the feature slices, then register them into the
//!   API state.

pub use sentio_domain as domain;
use sentio_domain::config::ApiConfig;
use sentio_domain::registry::InitializedSlice;
pub use sentio_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use sentio_analysis::analysis_router;
        pub use sentio_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use sentio_analysis as analysis;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "analysis",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::analysis::init(config)?];

    Ok(slices)
}
