//! Stable string codes for local errors, used as a structured log field.

pub trait RamcoErrorCode {
    /// Returns the error code string (e.g., "TRANSPORT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const HTTP_STATUS_ERROR: &str = "HTTP_STATUS_ERROR";
pub const MALFORMED_REPLY: &str = "MALFORMED_REPLY";
pub const REQUEST_ERROR: &str = "REQUEST_ERROR";
