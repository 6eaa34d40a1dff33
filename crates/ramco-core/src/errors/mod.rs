//! Error handling for the RAMCO client.
//! One error enum per concern, `thiserror` only.
//!
//! These are local failures. Remote status codes are never errors: they are
//! returned as data (see `models::Outcome`).

pub mod config_error;
pub mod error_code;
pub mod request_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use error_code::RamcoErrorCode;
pub use request_error::RequestError;
pub use transport_error::TransportError;

/// Aggregates the local error kinds via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RamcoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

impl RamcoErrorCode for RamcoError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
            Self::Request(e) => e.error_code(),
        }
    }
}

pub type RamcoResult<T> = Result<T, RamcoError>;
