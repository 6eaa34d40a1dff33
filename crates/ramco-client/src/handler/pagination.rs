//! StreamToken chase for 206 replies.

use std::collections::HashSet;

use ramco_core::{ChaseStop, CombinedResult, ErrorReply, Outcome, Reply, ResponseCode};
use serde_json::Value;

use super::Resume;

/// Collect `first` and every page behind its StreamToken, in fetch order.
///
/// Sequential: each request uses the token from the previous reply. Stops
/// cleanly when a reply carries no token or comes back 204. Stops early, with
/// the pages gathered so far, when a page fails, a token repeats, or
/// `max_pages` pages are held and another token is pending.
pub(super) fn chase<R: Resume + ?Sized>(first: Reply, resume: &R, max_pages: usize) -> Outcome {
    let mut fragments = CombinedResult::new();
    let mut seen: HashSet<String> = HashSet::new();

    let Reply {
        data, stream_token, ..
    } = first;
    fragments.push(data.unwrap_or(Value::Null));
    let mut pending = stream_token;

    while let Some(token) = pending.take() {
        if fragments.len() >= max_pages {
            tracing::warn!(
                pages = fragments.len(),
                max_pages,
                "ramco: page limit reached with a stream token still pending"
            );
            return incomplete(fragments, ChaseStop::PageLimit { pages: max_pages });
        }
        if !seen.insert(token.clone()) {
            tracing::warn!(
                pages = fragments.len(),
                "ramco: stream token repeated, stopping pagination"
            );
            return incomplete(fragments, ChaseStop::RepeatedToken { token });
        }

        let page = resume.resume(&token);
        match ResponseCode::classify(&page) {
            ResponseCode::Ok | ResponseCode::PartialData => {
                let Reply {
                    data, stream_token, ..
                } = page;
                fragments.push(data.unwrap_or(Value::Null));
                pending = stream_token;
                tracing::debug!(
                    pages = fragments.len(),
                    more = pending.is_some(),
                    "ramco: continuation page appended"
                );
            }
            ResponseCode::NoData => {
                tracing::debug!(
                    pages = fragments.len(),
                    "ramco: continuation returned no data"
                );
            }
            _ => {
                let error = ErrorReply::enrich(page);
                tracing::warn!(
                    pages = fragments.len(),
                    response_code = error.response_code(),
                    "ramco: continuation page failed, keeping collected pages"
                );
                return incomplete(fragments, ChaseStop::PageFailed(error));
            }
        }
    }

    tracing::info!(pages = fragments.len(), "ramco: combined result assembled");
    Outcome::Records(fragments)
}

fn incomplete(fragments: CombinedResult, stop: ChaseStop) -> Outcome {
    Outcome::Incomplete { fragments, stop }
}
