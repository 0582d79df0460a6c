pub mod error;
pub mod extract;
pub mod health;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorExt};
pub use extract::ApiJson;
pub use router::system_router;
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
