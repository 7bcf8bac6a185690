use crate::prelude::*;

/// A recorded transaction for which public nodes disagree on the
/// gas estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Fixture {
    /// Mainnet call to `0xe74Bc1C4...` with an IPFS path as calldata,
    /// replaying tx `0x4ce8bf18b702ad810bded432b4f59b20ee038b6828fb45e633cc199c944c2fce`.
    /// See <https://github.com/NethermindEth/nethermind/issues/5706>.
    ///
    /// Recorded results:
    /// - Erigon 2.48.0, geth 1.12.0: "gas required exceeds allowance (5000)"
    ///   without a `gas` field, 25880 with `gas = 0xFFFFFF`.
    /// - Nethermind 1.21.0: 25880 either way.
    /// - Public Geth based RPCs (blxrbdn, Llama, Ankr, Alchemy): "execution reverted".
    #[display("mainnet-allowance")]
    MainnetAllowance,

    /// Gnosis chain Safe `execTransaction` whose `safeTxGas` (0x14bb8 = 84920)
    /// is encoded in the calldata.
    /// See <https://github.com/NethermindEth/nethermind/issues/5637>.
    ///
    /// Recorded results:
    /// - Erigon 2.48.0, Nethermind 1.21.0: 29400.
    /// - Public Nethermind 1.14 to 1.19 RPCs: 59074, which is too low, the
    ///   Safe's `gasleft() >= safeTxGas` check needs 59074 + 84920 = 143994.
    #[display("gnosis-safe")]
    GnosisSafe,
}

impl Fixture {
    /// The `eth_estimateGas` param of this fixture.
    pub fn payload(&self) -> TransactionPayload {
        match self {
            Self::MainnetAllowance => TransactionPayload {
                from: Some("0x9D055dd23de15114EC95921208c741873eDE8558".to_owned()),
                to: Some("0xe74Bc1C4C27284ab7DbcF55f71FCc04b832FC32C".to_owned()),
                gas: Some("0xFFFFFF".to_owned()),
                data: Some("0x73053410000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000003000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000a000000000000000000000000000000000000000000000000000000000000000342f697066732f516d61624763754354786a57637a6b766f323977616d69355057435372514435656e744c62717a7a55486b79566f000000000000000000000000".to_owned()),
                ..TransactionPayload::default()
            },
            Self::GnosisSafe => TransactionPayload {
                kind: Some("0x0".to_owned()),
                from: Some("0xbbeedb6d8e56e23f5812e59d1b6602f15957271f".to_owned()),
                to: Some("0x828cf988de33bf93527533852e95e2da449ec171".to_owned()),
                data: Some("0x6a761202000000000000000000000000828cf988de33bf93527533852e95e2da449ec171000000000000000000000000000000000000000000000000000000e8d4a51000000000000000000000000000000000000000000000000000000000000000014000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000014bb80000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000016000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000041e0a9f565f27a4fd5743e5b7ad92f4217467bc5a7a419c7e159a5950de845ad9b0e88bf1c5549d5335ca087c010a7560a5caf991ba88850d10cb1e2d6196b4a151b00000000000000000000000000000000000000000000000000000000000000".to_owned()),
                ..TransactionPayload::default()
            },
        }
    }
}

/// A compiled-in roster of endpoints to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Network {
    /// Public Ethereum mainnet RPC providers.
    #[display("mainnet")]
    Mainnet,

    /// Public Gnosis chain RPC providers.
    #[display("gnosis")]
    Gnosis,

    /// A node running on this machine, e.g. a locally synced Erigon,
    /// geth or Nethermind with `--http` enabled.
    #[display("local")]
    Local,
}

impl Network {
    pub fn endpoints(&self) -> Vec<Endpoint> {
        let roster: &[(&str, &str)] = match self {
            Self::Mainnet => &[
                ("Llama", "https://eth.llamarpc.com"),
                ("blxrbdn", "https://virginia.rpc.blxrbdn.com"),
                ("Ankr", "https://rpc.ankr.com/eth"),
                ("Alchemy", "https://eth-mainnet.g.alchemy.com/v2/demo"),
            ],
            Self::Gnosis => &[
                ("Official", "https://rpc.gnosischain.com/"),
                ("Gateway", "https://rpc.gnosis.gateway.fm"),
                ("BlockPi", "https://gnosis.blockpi.network/v1/rpc/public"),
                ("Blast", "https://gnosis-mainnet.public.blastapi.io"),
                ("Pokt", "https://gnosischain-rpc.gateway.pokt.network"),
                ("Ankr", "https://rpc.ankr.com/gnosis"),
            ],
            Self::Local => &[("Localhost", "http://127.0.0.1:8545/")],
        };
        roster
            .iter()
            .map(|(name, url)| Endpoint::new(name, url))
            .collect()
    }

    /// The fixture whose divergence was recorded on this network.
    pub fn default_fixture(&self) -> Fixture {
        match self {
            Self::Gnosis => Fixture::GnosisSafe,
            Self::Mainnet | Self::Local => Fixture::MainnetAllowance,
        }
    }
}
