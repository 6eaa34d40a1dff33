//! What an API operation returns once its reply has been handled.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{CombinedResult, ErrorReply, Reply, ResponseCode};
use crate::constants::FIELD_FRAGMENTS;

/// Why a StreamToken chase ended before the service said it was done.
#[derive(Debug, Clone, PartialEq)]
pub enum ChaseStop {
    /// A continuation page came back with an error or unknown code.
    PageFailed(ErrorReply),
    /// The service handed out a token it had already given.
    RepeatedToken { token: String },
    /// The configured page cap was reached with a token still pending.
    PageLimit { pages: usize },
}

impl ChaseStop {
    /// The error value this stop degrades to.
    pub fn cause(&self) -> ErrorReply {
        match self {
            Self::PageFailed(e) => e.clone(),
            Self::RepeatedToken { .. } | Self::PageLimit { .. } => ErrorReply::unknown(),
        }
    }
}

impl fmt::Display for ChaseStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageFailed(e) => write!(f, "continuation page failed ({e})"),
            Self::RepeatedToken { token } => write!(f, "stream token '{token}' repeated"),
            Self::PageLimit { pages } => write!(f, "page limit of {pages} reached"),
        }
    }
}

/// Handled result of one operation. Remote errors are values here, never `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200, or a 206 whose pages were all fetched.
    Records(CombinedResult),
    /// 204, reply returned as received.
    NoData(Reply),
    /// Documented error with its description, or the unknown sentinel.
    Failed(ErrorReply),
    /// A 206 chase that stopped early. Pages gathered so far are kept.
    Incomplete {
        fragments: CombinedResult,
        stop: ChaseStop,
    },
}

impl Outcome {
    /// Status code of the outcome. Records always report 200.
    pub fn response_code(&self) -> i64 {
        match self {
            Self::Records(_) => ResponseCode::Ok.code(),
            Self::NoData(reply) => reply.code().code(),
            Self::Failed(e) => e.response_code(),
            Self::Incomplete { stop, .. } => stop.cause().response_code(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Records(_) | Self::NoData(_))
    }

    pub fn records(&self) -> Option<&CombinedResult> {
        match self {
            Self::Records(records) => Some(records),
            _ => None,
        }
    }

    pub fn into_records(self) -> Option<CombinedResult> {
        match self {
            Self::Records(records) => Some(records),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorReply> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// JSON in the service's shapes: an array for records, an object otherwise.
    /// An incomplete chase renders as its cause plus a `Fragments` array.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Records(records) => records.to_json(),
            Self::NoData(reply) => reply.to_json(),
            Self::Failed(e) => e.to_json(),
            Self::Incomplete { fragments, stop } => {
                let mut value = stop.cause().to_json();
                if let Value::Object(ref mut map) = value {
                    map.insert(FIELD_FRAGMENTS.to_string(), fragments.to_json());
                }
                value
            }
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
