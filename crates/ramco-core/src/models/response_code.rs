//! Total classification of replies into the fixed set of RAMCO status codes.

use std::fmt;

use super::description::{self, Description};
use super::Reply;
use crate::constants::UNKNOWN_RESPONSE_CODE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// 200: data included.
    Ok,
    /// 204: success, no payload (mutations).
    NoData,
    /// 206: one page of a larger result; a StreamToken follows.
    PartialData,
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 404
    NotFound,
    /// 422: ValidateUser with bad credentials.
    InvalidUser,
    /// 500
    ServerError,
    /// 999, any unrecognized code, or no code at all.
    Unknown,
}

impl ResponseCode {
    pub const ALL: [ResponseCode; 9] = [
        Self::Ok,
        Self::NoData,
        Self::PartialData,
        Self::BadRequest,
        Self::Unauthorized,
        Self::NotFound,
        Self::InvalidUser,
        Self::ServerError,
        Self::Unknown,
    ];

    pub fn from_code(code: i64) -> Self {
        match code {
            200 => Self::Ok,
            204 => Self::NoData,
            206 => Self::PartialData,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            422 => Self::InvalidUser,
            500 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Classify a reply. Missing or non-integer codes are `Unknown`.
    pub fn classify(reply: &Reply) -> Self {
        reply.response_code.map_or(Self::Unknown, Self::from_code)
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Ok => 200,
            Self::NoData => 204,
            Self::PartialData => 206,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::InvalidUser => 422,
            Self::ServerError => 500,
            Self::Unknown => UNKNOWN_RESPONSE_CODE,
        }
    }

    pub fn description(self) -> Description {
        match self {
            Self::Ok => description::OK,
            Self::NoData => description::OK_NO_DATA,
            Self::PartialData => description::OK_PARTIAL_DATA,
            Self::BadRequest => description::BAD_REQUEST,
            Self::Unauthorized => description::UNAUTHORIZED,
            Self::NotFound => description::NOT_FOUND,
            Self::InvalidUser => description::INVALID_USER,
            Self::ServerError => description::SERVER_ERROR,
            Self::Unknown => description::UNKNOWN,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::NoData | Self::PartialData)
    }

    /// Error codes that are enriched rather than replaced by the sentinel.
    /// 401 has a description but is not among them.
    pub fn is_documented_error(self) -> bool {
        matches!(
            self,
            Self::BadRequest | Self::NotFound | Self::InvalidUser | Self::ServerError
        )
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.description().short)
    }
}
