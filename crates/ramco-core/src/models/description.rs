//! Static description pairs for RAMCO response codes, as documented by the vendor.

use serde::Serialize;

/// Short label plus verbose explanation for one response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Description {
    #[serde(rename = "DescriptionShort")]
    pub short: &'static str,
    #[serde(rename = "DescriptionVerbose")]
    pub verbose: &'static str,
}

pub const OK: Description = Description {
    short: "OK",
    verbose: "The request was successfully processed and data is included in the response",
};

pub const OK_NO_DATA: Description = Description {
    short: "OK: No Data",
    verbose: "The request was successfully processed but no data is included in the response. \
              This is typical of UpdateEntity requests.",
};

pub const OK_PARTIAL_DATA: Description = Description {
    short: "OK: Partial Data",
    verbose: "The request was successfully processed and partial data is included in the response. \
              This is the expected response when the dataset that Ramco needs to return to the user \
              is too large. A StreamToken will be returned to allow the user to fetch the remaining data.",
};

pub const BAD_REQUEST: Description = Description {
    short: "Bad Request",
    verbose: "The request was not understood. See the response text for more information.",
};

pub const UNAUTHORIZED: Description = Description {
    short: "Unauthorized",
    verbose: "The request was understood but it will not be fulfilled due to a lack of user \
              permissions. See the response text for more information.",
};

pub const NOT_FOUND: Description = Description {
    short: "Not Found",
    verbose: "The request is understood but no matching data is found to return.",
};

pub const INVALID_USER: Description = Description {
    short: "Invalid User",
    verbose: "No user with provided username/password combination. This error is specific to \
              the AuthenticateUser request.",
};

pub const SERVER_ERROR: Description = Description {
    short: "Server Error",
    verbose: "Something is not working correctly server-side. This is not an issue that can be \
              resolved by modifying query syntax.",
};

pub const UNKNOWN: Description = Description {
    short: "Unknown Internal Error",
    verbose: "No code or response returned from RAMCO. Check your connections and settings. \
              This error originates in the calling code or in the client library itself.",
};
