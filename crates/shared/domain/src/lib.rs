//! # Domain Models
//!
//! Pure data shared by the API server, the dashboard and the feature slices:
//! wire models, configuration structs and constants. No I/O and no logic
//! beyond small helpers on the types themselves.

pub mod config;
pub mod constants;
pub mod registry;
pub mod sentiment;
