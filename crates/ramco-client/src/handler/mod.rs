//! Response handler: classifies a reply, decorates documented errors, and
//! follows StreamTokens until the result is complete.

mod pagination;

use ramco_core::config::{defaults, PagingConfig};
use ramco_core::{CombinedResult, ErrorReply, Outcome, Reply, ResponseCode};

/// Fetches the next page of a suspended GetEntities query.
pub trait Resume {
    fn resume(&self, stream_token: &str) -> Reply;
}

impl<R: Resume + ?Sized> Resume for &R {
    fn resume(&self, stream_token: &str) -> Reply {
        (**self).resume(stream_token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHandler {
    max_pages: usize,
}

impl Default for ResponseHandler {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_MAX_PAGES)
    }
}

impl ResponseHandler {
    /// `max_pages` bounds one chase, first page included. Zero is treated as one.
    pub fn new(max_pages: usize) -> Self {
        Self {
            max_pages: max_pages.max(1),
        }
    }

    pub fn from_config(paging: &PagingConfig) -> Self {
        Self::new(paging.effective_max_pages())
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Turn a raw reply into the value an operation returns. Total: every
    /// reply maps to some `Outcome`.
    pub fn handle<R: Resume + ?Sized>(&self, reply: Reply, resume: &R) -> Outcome {
        match ResponseCode::classify(&reply) {
            ResponseCode::Ok => Outcome::Records(CombinedResult::single(reply.to_json())),
            ResponseCode::NoData => Outcome::NoData(reply),
            ResponseCode::PartialData => pagination::chase(reply, resume, self.max_pages),
            code if code.is_documented_error() => {
                tracing::debug!(%code, "ramco: documented error reply");
                Outcome::Failed(ErrorReply::enrich(reply))
            }
            _ => {
                tracing::debug!(
                    response_code = reply.response_code,
                    "ramco: unrecognized reply, returning unknown sentinel"
                );
                Outcome::Failed(ErrorReply::unknown())
            }
        }
    }
}
