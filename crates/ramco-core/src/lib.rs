//! # ramco-core
//!
//! Foundation crate for the RAMCO API client.
//! Defines the reply model, status codes and their descriptions, errors,
//! config, tracing setup, and constants. `ramco-client` builds on it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RamcoConfig;
pub use errors::{RamcoError, RamcoResult};
pub use models::{
    ChaseStop, CombinedResult, Description, ErrorReply, Outcome, Reply, ResponseCode,
};
