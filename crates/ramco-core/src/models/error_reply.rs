//! A reply decorated with the description pair of its status code.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{Description, Reply, ResponseCode};
use crate::constants::{FIELD_DESCRIPTION_SHORT, FIELD_DESCRIPTION_VERBOSE};

/// Raw reply plus its canonical description pair.
///
/// Built only through [`ErrorReply::enrich`] and [`ErrorReply::unknown`], so
/// the description always matches the code and is never duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReply {
    reply: Reply,
    description: Description,
}

impl ErrorReply {
    /// Attach the description pair of the reply's own code.
    ///
    /// Description fields already present on the reply (for example when an
    /// enriched reply is fed back in) are dropped first, so enriching twice
    /// gives the same value as enriching once. Any reply whose code is not a
    /// documented error yields the sentinel, whatever else it carries.
    pub fn enrich(mut reply: Reply) -> Self {
        let code = reply.code();
        if !code.is_documented_error() {
            return Self::unknown();
        }
        reply.extra.remove(FIELD_DESCRIPTION_SHORT);
        reply.extra.remove(FIELD_DESCRIPTION_VERBOSE);
        Self {
            reply,
            description: code.description(),
        }
    }

    /// The fixed unknown sentinel: code 999 and the unknown description.
    pub fn unknown() -> Self {
        Self {
            reply: Reply::unknown(),
            description: ResponseCode::Unknown.description(),
        }
    }

    pub fn reply(&self) -> &Reply {
        &self.reply
    }

    pub fn into_reply(self) -> Reply {
        self.reply
    }

    pub fn description(&self) -> Description {
        self.description
    }

    pub fn code(&self) -> ResponseCode {
        self.reply.code()
    }

    pub fn response_code(&self) -> i64 {
        self.code().code()
    }

    pub fn is_unknown(&self) -> bool {
        self.code() == ResponseCode::Unknown
    }

    /// The reply's fields merged with `DescriptionShort` / `DescriptionVerbose`.
    pub fn to_json(&self) -> Value {
        let mut value = self.reply.to_json();
        if let Value::Object(ref mut map) = value {
            map.insert(
                FIELD_DESCRIPTION_SHORT.to_string(),
                Value::from(self.description.short),
            );
            map.insert(
                FIELD_DESCRIPTION_VERBOSE.to_string(),
                Value::from(self.description.verbose),
            );
        }
        value
    }
}

impl std::fmt::Display for ErrorReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response_code(), self.description.short)
    }
}

impl Serialize for ErrorReply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
