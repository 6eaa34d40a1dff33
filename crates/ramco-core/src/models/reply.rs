//! One parsed RAMCO response body.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::ResponseCode;
use crate::constants::{
    FIELD_DATA, FIELD_RESPONSE_CODE, FIELD_STREAM_TOKEN, UNKNOWN_RESPONSE_CODE,
};
use crate::errors::TransportError;

/// A RAMCO reply: `ResponseCode`, optional `Data`, optional `StreamToken`,
/// and whatever other fields the service sent, kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reply {
    /// `None` when the field is absent or not an integer.
    pub response_code: Option<i64>,
    pub data: Option<Value>,
    /// Present only on 206 pages.
    pub stream_token: Option<String>,
    pub extra: Map<String, Value>,
}

impl Reply {
    pub fn new(response_code: i64) -> Self {
        Self {
            response_code: Some(response_code),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_stream_token(mut self, token: impl Into<String>) -> Self {
        self.stream_token = Some(token.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// The reply used whenever the transport could not produce a real one.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_RESPONSE_CODE)
    }

    pub fn code(&self) -> ResponseCode {
        ResponseCode::classify(self)
    }

    /// Build a reply from any JSON value. Never fails: a non-object or a
    /// missing/non-integer `ResponseCode` gives a reply with no code (an
    /// integral float such as `404.0` counts as the integer), and fields
    /// that do not fit their typed slot stay in `extra` untouched.
    pub fn from_json(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let response_code = match map.remove(FIELD_RESPONSE_CODE) {
            Some(v) => match integral(&v) {
                Some(code) => Some(code),
                None => {
                    map.insert(FIELD_RESPONSE_CODE.to_string(), v);
                    None
                }
            },
            None => None,
        };

        let stream_token = match map.remove(FIELD_STREAM_TOKEN) {
            Some(Value::String(token)) => Some(token),
            Some(other) => {
                map.insert(FIELD_STREAM_TOKEN.to_string(), other);
                None
            }
            None => None,
        };

        let data = map.remove(FIELD_DATA);

        Self {
            response_code,
            data,
            stream_token,
            extra: map,
        }
    }

    /// Strict parse of a response body: it must be a JSON object with an
    /// integer `ResponseCode`.
    pub fn parse(body: &str) -> Result<Self, TransportError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| TransportError::MalformedBody {
                reason: e.to_string(),
            })?;
        if !value.is_object() {
            return Err(TransportError::MalformedBody {
                reason: format!("expected a JSON object, got {}", json_kind(&value)),
            });
        }
        let reply = Self::from_json(value);
        if reply.response_code.is_none() {
            return Err(TransportError::MissingResponseCode);
        }
        Ok(reply)
    }

    /// Render the reply back into the service's dictionary shape.
    pub fn to_json(&self) -> Value {
        let mut map = self.extra.clone();
        if let Some(code) = self.response_code {
            map.insert(FIELD_RESPONSE_CODE.to_string(), Value::from(code));
        }
        if let Some(ref data) = self.data {
            map.insert(FIELD_DATA.to_string(), data.clone());
        }
        if let Some(ref token) = self.stream_token {
            map.insert(FIELD_STREAM_TOKEN.to_string(), Value::String(token.clone()));
        }
        Value::Object(map)
    }
}

impl Serialize for Reply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// `404` and `404.0` both read as 404. Fractional or out-of-range numbers do not.
fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
