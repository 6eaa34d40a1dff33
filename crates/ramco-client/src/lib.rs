//! # ramco-client
//!
//! Typed wrapper for the RAMCO association-management API.
//!
//! Every operation posts one form to the fixed endpoint, then hands the reply
//! to the [`ResponseHandler`]: documented errors come back decorated with
//! their description text, and 206 replies are followed through their
//! StreamTokens so callers get one [`CombinedResult`]. Nothing here returns
//! `Err` for a remote status; see [`Outcome`].
//!
//! ```no_run
//! use ramco_client::{AttributeList, EntityQuery, RamcoClient};
//! use ramco_core::RamcoConfig;
//!
//! let client = RamcoClient::from_config(&RamcoConfig::with_key("my-key"))?;
//! let query = EntityQuery::new("Contact", AttributeList::new(["FirstName", "LastName"])?)
//!     .filter("LastName<eq>#Smith#");
//! if let Some(records) = client.get_entities(&query).records() {
//!     println!("{} pages", records.len());
//! }
//! # Ok::<(), ramco_core::RamcoError>(())
//! ```

pub mod client;
pub mod handler;
pub mod request;
pub mod transport;

pub use client::RamcoClient;
pub use handler::{ResponseHandler, Resume};
pub use request::{AttributeList, AttributeValues, EntityQuery, Operation, Request};
pub use transport::{Caller, HttpTransport, HttpTransportConfig, RawResponse, Transport};

pub use ramco_core::{ChaseStop, CombinedResult, ErrorReply, Outcome, Reply, ResponseCode};
