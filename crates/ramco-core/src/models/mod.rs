//! Reply model and the values the response handler returns.

pub mod combined;
pub mod description;
pub mod error_reply;
pub mod outcome;
pub mod reply;
pub mod response_code;

pub use combined::CombinedResult;
pub use description::Description;
pub use error_reply::ErrorReply;
pub use outcome::{ChaseStop, Outcome};
pub use reply::Reply;
pub use response_code::ResponseCode;
