//! Transport errors. These stay inside the transport caller, which turns
//! every one of them into the unknown sentinel reply.

use super::error_code::{self, RamcoErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP client could not be built: {reason}")]
    ClientBuild { reason: String },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("HTTP {status} with unparseable body: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("malformed reply body: {reason}")]
    MalformedBody { reason: String },

    #[error("reply has no integer ResponseCode")]
    MissingResponseCode,
}

impl RamcoErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ClientBuild { .. } | Self::Network { .. } => error_code::NETWORK_ERROR,
            Self::HttpStatus { .. } => error_code::HTTP_STATUS_ERROR,
            Self::MalformedBody { .. } | Self::MissingResponseCode => error_code::MALFORMED_REPLY,
        }
    }
}
