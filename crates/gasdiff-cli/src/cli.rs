pub use clap::{Parser, ValueEnum};
pub use gasdiff::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "gasdiff", version)]
#[command(
    about = "Compares eth_estimateGas across Ethereum nodes",
    long_about = "Sends the same recorded transaction to several Ethereum JSON-RPC endpoints, asks each for its client version and gas estimate, and prints one line per endpoint."
)]
pub struct Cli {
    /// Compiled-in roster of endpoints to query.
    #[arg(short = 'n', long = "network", value_enum, default_value_t = NetworkArg::Mainnet)]
    pub network: NetworkArg,

    /// Transaction to estimate, defaults to the one recorded for `--network`.
    #[arg(short = 'f', long = "fixture", value_enum)]
    pub fixture: Option<FixtureArg>,

    /// Endpoint on the form `NAME=URL`, may be repeated.
    /// Replaces the roster of `--network` when given.
    #[arg(short = 'e', long = "endpoint")]
    pub endpoints: Vec<Endpoint>,

    /// Overrides the `gas` field of the transaction, e.g. `0xFFFFFF`.
    #[arg(short = 'g', long = "gas")]
    pub gas: Option<String>,

    /// Per request timeout in seconds, network default if omitted.
    #[arg(short = 't', long = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NetworkArg {
    Mainnet,
    Gnosis,
    Local,
}

impl From<NetworkArg> for Network {
    fn from(value: NetworkArg) -> Self {
        match value {
            NetworkArg::Mainnet => Network::Mainnet,
            NetworkArg::Gnosis => Network::Gnosis,
            NetworkArg::Local => Network::Local,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureArg {
    MainnetAllowance,
    GnosisSafe,
}

impl From<FixtureArg> for Fixture {
    fn from(value: FixtureArg) -> Self {
        match value {
            FixtureArg::MainnetAllowance => Fixture::MainnetAllowance,
            FixtureArg::GnosisSafe => Fixture::GnosisSafe,
        }
    }
}

impl TryFrom<Cli> for ComparisonConfig {
    type Error = Error;
    fn try_from(args: Cli) -> Result<Self> {
        let network = Network::from(args.network);
        let fixture = args
            .fixture
            .map(Fixture::from)
            .unwrap_or_else(|| network.default_fixture());
        let endpoints = if args.endpoints.is_empty() {
            network.endpoints()
        } else {
            args.endpoints
        };
        let payload = match args.gas {
            Some(gas) => fixture.payload().with_gas(gas),
            None => fixture.payload(),
        };
        ComparisonConfigBuilder::default()
            .endpoints(endpoints)
            .payload(payload)
            .request_timeout(args.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(Error::invalid_config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(args: &[&str]) -> ComparisonConfig {
        let cli = Cli::try_parse_from(std::iter::once("gasdiff").chain(args.iter().copied()))
            .unwrap();
        ComparisonConfig::try_from(cli).unwrap()
    }

    #[test]
    fn defaults_reproduce_mainnet_run() {
        let sut = config(&[]);
        assert_eq!(sut.endpoints(), &Network::Mainnet.endpoints());
        assert_eq!(sut.payload(), &Fixture::MainnetAllowance.payload());
        assert_eq!(sut.request_timeout(), None);
    }

    #[test]
    fn gnosis_uses_safe_fixture() {
        let sut = config(&["--network", "gnosis"]);
        assert_eq!(sut.payload(), &Fixture::GnosisSafe.payload());
        assert_eq!(sut.endpoints().len(), 6);
    }

    #[test]
    fn explicit_fixture_wins() {
        let sut = config(&["-n", "gnosis", "-f", "mainnet-allowance"]);
        assert_eq!(sut.payload(), &Fixture::MainnetAllowance.payload());
    }

    #[test]
    fn endpoints_replace_roster() {
        let sut = config(&[
            "-e",
            "Erigon=http://127.0.0.1:8545/",
            "-e",
            "Nethermind=http://127.0.0.1:8546/",
        ]);
        assert_eq!(
            sut.endpoints(),
            &vec![
                Endpoint::new("Erigon", "http://127.0.0.1:8545/"),
                Endpoint::new("Nethermind", "http://127.0.0.1:8546/"),
            ]
        );
    }

    #[test]
    fn gas_and_timeout() {
        let sut = config(&["-f", "gnosis-safe", "--gas", "0x23280", "-t", "30"]);
        assert_eq!(sut.payload().gas().as_deref(), Some("0x23280"));
        assert_eq!(sut.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let res = Cli::try_parse_from(["gasdiff", "-e", "http://127.0.0.1:8545/"]);
        assert!(res.is_err());
    }
}
