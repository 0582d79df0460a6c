use crate::client::BackendClient;
use crate::error::DashboardError;
use sentio_domain::config::DashboardConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct DashboardStateInner {
    pub config: DashboardConfig,
    pub backend: BackendClient,
}

/// Shared state of the dashboard router.
#[derive(Debug, Clone)]
pub struct DashboardState {
    inner: Arc<DashboardStateInner>,
}

impl DashboardState {
    /// # Errors
    /// Fails if the backend client cannot be built.
    pub fn new(config: DashboardConfig) -> Result<Self, DashboardError> {
        let backend = BackendClient::new(&config.backend)?;
        Ok(Self { inner: Arc::new(DashboardStateInner { config, backend }) })
    }
}

impl Deref for DashboardState {
    type Target = DashboardStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
