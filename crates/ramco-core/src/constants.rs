//! Fixed values of the RAMCO v2 API.

/// Base URL of the RAMCO API. Every operation is a POST to this URL.
pub const RAMCO_API_URL: &str = "https://api.ramcoams.com/api/v2/";

/// Status code carried by the unknown sentinel reply.
pub const UNKNOWN_RESPONSE_CODE: i64 = 999;

// --- Reply fields ---
pub const FIELD_RESPONSE_CODE: &str = "ResponseCode";
pub const FIELD_DATA: &str = "Data";
pub const FIELD_STREAM_TOKEN: &str = "StreamToken";
pub const FIELD_DESCRIPTION_SHORT: &str = "DescriptionShort";
pub const FIELD_DESCRIPTION_VERBOSE: &str = "DescriptionVerbose";

/// Added to the JSON rendering of a chase that stopped early.
pub const FIELD_FRAGMENTS: &str = "Fragments";

// --- Request fields ---
pub const FIELD_KEY: &str = "key";
pub const FIELD_OPERATION: &str = "Operation";
