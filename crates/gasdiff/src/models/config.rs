use crate::prelude::*;

/// Everything one comparison run needs: which endpoints to ask,
/// for which transaction, and how long to wait for each answer.
#[derive(Debug, Clone, Builder, Getters, CopyGetters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ComparisonConfig {
    #[getset(get = "pub")]
    endpoints: Vec<Endpoint>,

    #[getset(get = "pub")]
    payload: TransactionPayload,

    /// Upper bound per JSON-RPC request, `None` uses the network default.
    #[builder(default)]
    #[getset(get_copy = "pub")]
    request_timeout: Option<Duration>,
}

impl ComparisonConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.endpoints {
            Some(endpoints) if endpoints.is_empty() => {
                Err("at least one endpoint is required".to_owned())
            }
            _ => Ok(()),
        }
    }
}

impl ComparisonConfig {
    /// The recorded fixture against the compiled-in roster of `network`.
    pub fn for_network(network: Network) -> Self {
        Self {
            endpoints: network.endpoints(),
            payload: network.default_fixture().payload(),
            request_timeout: None,
        }
    }
}
