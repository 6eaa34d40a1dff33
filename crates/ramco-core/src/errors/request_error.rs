//! Request shape errors, raised while building attribute lists and values.

use super::error_code::{self, RamcoErrorCode};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("attribute name '{name}' contains reserved character '{ch}'")]
    ReservedCharacter { name: String, ch: char },

    #[error("value of '{name}' contains ',' but no string delimiter is set")]
    UndelimitedComma { name: String },

    #[error("value of '{name}' contains the string delimiter '{delimiter}'")]
    DelimiterInValue { name: String, delimiter: char },

    #[error("'{delimiter}' cannot be used as a string delimiter")]
    InvalidDelimiter { delimiter: char },
}

impl RamcoErrorCode for RequestError {
    fn error_code(&self) -> &'static str {
        error_code::REQUEST_ERROR
    }
}
