use derive_more::IsVariant;

use crate::prelude::*;

/// All errors which can occur while querying an Ethereum node
/// or comparing the gas estimates of several nodes.
#[derive(Debug, ThisError, IsVariant, PartialEq)]
pub enum Error {
    /// Connection, DNS, timeout or HTTP-layer failure.
    #[error("Transport failure talking to `{url}`: {underlying}")]
    Transport { url: String, underlying: String },

    /// The response body was not the JSON we expected.
    #[error("Failed to decode response as `{kind}`, underlying error: `{underlying}`")]
    Decode { kind: String, underlying: String },

    /// The node answered with a well formed JSON-RPC error object,
    /// e.g. "gas required exceeds allowance" or "execution reverted".
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node answered some other request than the one we sent.
    #[error("Response id `{found}` does not match request id `{expected}`")]
    MismatchedResponseId { expected: u64, found: String },

    /// A quantity returned by the node is not a base-16 integer
    /// fitting in 64 bits.
    #[error("Not a hex quantity: {bad_value}")]
    InvalidHexQuantity { bad_value: String },

    /// Failed to serialize request parameters into JSON.
    #[error("Failed to encode request params, underlying error: `{underlying}`")]
    Encode { underlying: String },

    /// Endpoint text was not on the form `NAME=URL`.
    #[error("Invalid endpoint `{bad_value}`, expected `NAME=URL`")]
    InvalidEndpoint { bad_value: String },

    /// Unable to construct the HTTP client.
    #[error("Unable to build HTTP client: {underlying}")]
    BuildHttpClient { underlying: String },

    /// Incomplete or contradictory run configuration.
    #[error("Invalid configuration: {underlying}")]
    InvalidConfig { underlying: String },
}

// ========================================
// Public Implementation
// ========================================
impl Error {
    pub fn transport(url: impl AsRef<str>, e: impl std::fmt::Display) -> Self {
        Error::Transport {
            url: url.as_ref().to_owned(),
            underlying: e.to_string(),
        }
    }

    pub fn decode<T>(e: impl std::fmt::Display) -> Self {
        Error::Decode {
            kind: std::any::type_name::<T>().to_owned(),
            underlying: e.to_string(),
        }
    }

    pub fn encode(e: impl std::fmt::Display) -> Self {
        Error::Encode {
            underlying: e.to_string(),
        }
    }

    pub fn build_http_client(e: impl std::fmt::Display) -> Self {
        Error::BuildHttpClient {
            underlying: e.to_string(),
        }
    }

    pub fn invalid_config(e: impl std::fmt::Display) -> Self {
        Error::InvalidConfig {
            underlying: e.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
