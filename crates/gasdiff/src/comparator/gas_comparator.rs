use futures_util::{StreamExt, stream::FuturesUnordered};

use crate::prelude::*;

/// Asks several nodes for the gas estimate of the same transaction, so
/// that diverging estimates between client implementations and RPC
/// providers can be compared side by side.
#[derive(derive_more::Debug)]
#[debug("GasComparator")]
pub struct GasComparator {
    client: JsonRpcClient,
}

impl GasComparator {
    pub fn new(client: JsonRpcClient) -> Self {
        Self { client }
    }

    /// Creates a new `GasComparator` sending requests with `transport`.
    pub fn with_transport(transport: Arc<dyn JsonRpcTransport + Send + Sync>) -> Self {
        Self::new(JsonRpcClient::new(transport))
    }

    /// Creates a new `GasComparator` talking HTTP to the nodes.
    pub fn http(request_timeout: Option<Duration>) -> Result<Self> {
        JsonRpcClient::http(request_timeout).map(Self::new)
    }
}

// ========================================
// Public Implementation
// ========================================
impl GasComparator {
    /// Client version and then gas estimate of `payload` from a single
    /// endpoint, the first failing call fails the endpoint.
    pub async fn evaluate(
        &self,
        endpoint: &Endpoint,
        payload: &TransactionPayload,
    ) -> Result<EstimateReport> {
        let url = endpoint.url();
        let client_version = self.client.client_version(url).await?;
        debug!("Endpoint '{}' runs {}", endpoint.name(), client_version);
        let gas_estimate = self.client.estimate_gas(url, payload).await?;
        Ok(EstimateReport::new(client_version, gas_estimate))
    }

    /// Evaluates every endpoint concurrently and waits for all of them.
    /// Failures are isolated per endpoint. Outcomes are returned in the
    /// order of `endpoints`.
    pub async fn compare(
        &self,
        endpoints: &[Endpoint],
        payload: &TransactionPayload,
    ) -> Vec<EndpointOutcome> {
        self.compare_reporting(endpoints, payload, |_| {}).await
    }

    /// Like [`GasComparator::compare`], additionally calling `on_outcome`
    /// as soon as each endpoint is done, in order of completion.
    pub async fn compare_reporting(
        &self,
        endpoints: &[Endpoint],
        payload: &TransactionPayload,
        mut on_outcome: impl FnMut(&EndpointOutcome),
    ) -> Vec<EndpointOutcome> {
        info!(
            "Comparing gas estimates of {} endpoints",
            endpoints.len()
        );
        let mut pending = endpoints
            .iter()
            .enumerate()
            .map(|(index, endpoint)| async move {
                let result = self.evaluate(endpoint, payload).await;
                (index, EndpointOutcome::new(endpoint.clone(), result))
            })
            .collect::<FuturesUnordered<_>>();

        let mut outcomes = Vec::with_capacity(endpoints.len());
        while let Some((index, outcome)) = pending.next().await {
            outcome.log();
            on_outcome(&outcome);
            outcomes.push((index, outcome));
        }
        outcomes.sort_by_key(|(index, _)| *index);
        outcomes.into_iter().map(|(_, outcome)| outcome).collect()
    }

    /// Runs the comparison described by `config`.
    pub async fn run(
        config: &ComparisonConfig,
        on_outcome: impl FnMut(&EndpointOutcome),
    ) -> Result<Vec<EndpointOutcome>> {
        let comparator = Self::http(config.request_timeout())?;
        Ok(comparator
            .compare_reporting(config.endpoints(), config.payload(), on_outcome)
            .await)
    }
}
