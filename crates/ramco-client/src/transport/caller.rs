//! The transport caller: exactly one round trip per call, never an error.

use std::fmt;

use ramco_core::errors::{RamcoErrorCode, TransportError};
use ramco_core::Reply;

use super::Transport;
use crate::handler::Resume;
use crate::request::Request;

/// Pairs a transport with the access key injected at construction.
pub struct Caller<T> {
    transport: T,
    api_key: String,
}

impl<T: Transport> Caller<T> {
    pub fn new(transport: T, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and parse the reply.
    ///
    /// Network failures, unparseable bodies and replies without an integer
    /// `ResponseCode` all come back as the unknown reply (code 999).
    pub fn call(&self, request: &Request) -> Reply {
        tracing::debug!(
            operation = %request.operation(),
            params = request.params().len(),
            "ramco: sending request"
        );
        match self.round_trip(request) {
            Ok(reply) => {
                tracing::debug!(
                    operation = %request.operation(),
                    response_code = reply.response_code,
                    has_stream_token = reply.stream_token.is_some(),
                    "ramco: reply received"
                );
                reply
            }
            Err(e) => {
                tracing::warn!(
                    operation = %request.operation(),
                    error_code = e.error_code(),
                    "ramco: transport failure, substituting unknown reply: {e}"
                );
                Reply::unknown()
            }
        }
    }

    fn round_trip(&self, request: &Request) -> Result<Reply, TransportError> {
        let fields = request.form_fields(&self.api_key);
        let raw = self.transport.post_form(&fields)?;
        match Reply::parse(&raw.body) {
            Ok(reply) => Ok(reply),
            Err(e) if !raw.is_success() => Err(TransportError::HttpStatus {
                status: raw.status,
                reason: e.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

impl<T: Transport> Resume for Caller<T> {
    fn resume(&self, stream_token: &str) -> Reply {
        self.call(&Request::resume(stream_token))
    }
}

impl<T: fmt::Debug> fmt::Debug for Caller<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caller")
            .field("transport", &self.transport)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
