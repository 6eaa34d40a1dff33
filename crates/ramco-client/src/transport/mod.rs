//! Transport layer: one form-encoded POST per call, and the caller that turns
//! whatever comes back into a `Reply`.

pub mod caller;
pub mod http_transport;

use std::sync::Arc;

use ramco_core::errors::TransportError;

pub use caller::Caller;
pub use http_transport::{HttpTransport, HttpTransportConfig};

/// Status and body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one form-encoded request to the RAMCO endpoint.
pub trait Transport: Send + Sync {
    fn post_form(&self, fields: &[(String, String)]) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn post_form(&self, fields: &[(String, String)]) -> Result<RawResponse, TransportError> {
        (**self).post_form(fields)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post_form(&self, fields: &[(String, String)]) -> Result<RawResponse, TransportError> {
        (**self).post_form(fields)
    }
}
