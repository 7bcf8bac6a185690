use crate::prelude::*;

/// A node or RPC provider we ask for a gas estimate, e.g.
/// `Ankr` at `https://rpc.ankr.com/eth`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_more::Display)]
#[display("{name} ({url})")]
pub struct Endpoint {
    /// Short human readable name, used as prefix in the result line.
    #[getset(get = "pub")]
    name: String,

    /// JSON-RPC URL requests are POSTed to.
    #[getset(get = "pub")]
    url: String,
}

impl Endpoint {
    pub fn new(name: impl AsRef<str>, url: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_owned(),
            url: url.as_ref().to_owned(),
        }
    }
}

impl FromStr for Endpoint {
    type Err = crate::Error;

    /// Parses `NAME=URL`, e.g. `Localhost=http://127.0.0.1:8545/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidEndpoint {
            bad_value: s.to_owned(),
        };
        let (name, url) = s.split_once('=').ok_or_else(invalid)?;
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() || url.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(name, url))
    }
}
