use crate::prelude::*;

/// What a single endpoint told us about the compared transaction.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct EstimateReport {
    /// Self reported node software, e.g. `Geth/v1.12.0-stable`.
    #[getset(get = "pub")]
    client_version: String,

    #[getset(get_copy = "pub")]
    gas_estimate: Gas,
}

impl EstimateReport {
    pub fn new(client_version: impl Into<String>, gas_estimate: Gas) -> Self {
        Self {
            client_version: client_version.into(),
            gas_estimate,
        }
    }
}

/// The result of evaluating one [`Endpoint`], successful or not.
#[derive(Debug, PartialEq, Getters)]
pub struct EndpointOutcome {
    #[getset(get = "pub")]
    endpoint: Endpoint,

    #[getset(get = "pub")]
    result: Result<EstimateReport>,
}

impl EndpointOutcome {
    pub fn new(endpoint: Endpoint, result: Result<EstimateReport>) -> Self {
        Self { endpoint, result }
    }

    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    pub(crate) fn log(&self) {
        match &self.result {
            Ok(report) => info!(
                "Endpoint '{}' ({}) estimated {}",
                self.endpoint.name(),
                report.client_version(),
                report.gas_estimate()
            ),
            Err(e) => error!("Endpoint {} failed: {}", self.endpoint, e),
        }
    }
}

impl std::fmt::Display for EndpointOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.endpoint.name();
        match &self.result {
            Ok(report) => write!(
                f,
                "Client '{}-{}' estimated '{}'",
                name,
                report.client_version(),
                report.gas_estimate()
            ),
            Err(e) => write!(f, "Client '{}' failed: {}", name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geth() -> Endpoint {
        Endpoint::new("Geth", "http://127.0.0.1:8545/")
    }

    #[test]
    fn success_line() {
        let report = EstimateReport::new("Geth/v1.12.0-stable", Gas::from(29_400));
        let sut = EndpointOutcome::new(geth(), Ok(report));
        assert_eq!(
            sut.to_string(),
            "Client 'Geth-Geth/v1.12.0-stable' estimated '29400'"
        );
        assert!(!sut.is_failure());
    }

    #[test]
    fn failure_line() {
        let sut = EndpointOutcome::new(
            geth(),
            Err(Error::Rpc {
                code: -32000,
                message: "gas required exceeds allowance (5000)".to_owned(),
            }),
        );
        assert_eq!(
            sut.to_string(),
            "Client 'Geth' failed: JSON-RPC error -32000: gas required exceeds allowance (5000)"
        );
        assert!(sut.is_failure());
    }
}
