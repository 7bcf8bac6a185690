use crate::prelude::*;

/// The transaction object sent as the single param of `eth_estimateGas`.
///
/// Every value is a hex string which is passed through verbatim, nothing
/// is validated. Fields which are `None` are left out of the JSON, so the
/// node applies its own defaults for them.
#[serde_with::skip_serializing_none]
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters, Default,
)]
#[builder(setter(into, strip_option), default)]
pub struct TransactionPayload {
    /// Transaction envelope type, e.g. "0x0" for legacy.
    #[serde(rename = "type")]
    #[getset(get = "pub")]
    pub(crate) kind: Option<String>,

    #[getset(get = "pub")]
    pub(crate) from: Option<String>,

    #[getset(get = "pub")]
    pub(crate) to: Option<String>,

    /// Upper bound the node may use while searching for an estimate.
    #[getset(get = "pub")]
    pub(crate) gas: Option<String>,

    #[serde(rename = "gasPrice")]
    #[getset(get = "pub")]
    pub(crate) gas_price: Option<String>,

    #[getset(get = "pub")]
    pub(crate) value: Option<String>,

    #[getset(get = "pub")]
    pub(crate) data: Option<String>,
}

impl TransactionPayload {
    /// Returns a copy with the `gas` field replaced, e.g. `"0xFFFFFF"`.
    pub fn with_gas(&self, gas: impl AsRef<str>) -> Self {
        Self {
            gas: Some(gas.as_ref().to_owned()),
            ..self.clone()
        }
    }
}

impl IsRpcRequest for TransactionPayload {
    type Param = TransactionPayload;
    type Output = String;
    fn method() -> String {
        "eth_estimateGas".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_skips_absent_fields() {
        let sut = TransactionPayloadBuilder::default()
            .from("0xbbeedb6d8e56e23f5812e59d1b6602f15957271f")
            .data("0x")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&sut).unwrap(),
            json!({
                "from": "0xbbeedb6d8e56e23f5812e59d1b6602f15957271f",
                "data": "0x"
            })
        );
    }

    #[test]
    fn serialize_renames_type_and_gas_price() {
        let sut = TransactionPayloadBuilder::default()
            .kind("0x0")
            .gas_price("0x9184e72a000")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&sut).unwrap(),
            json!({ "type": "0x0", "gasPrice": "0x9184e72a000" })
        );
    }

    #[test]
    fn values_are_passed_through_verbatim() {
        let json = json!({ "from": "not even hex", "gas": "0xFFFFFF" });
        let sut: TransactionPayload = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&sut).unwrap(), json);
    }

    #[test]
    fn with_gas_overrides_only_gas() {
        let original = Fixture::GnosisSafe.payload();
        let sut = original.with_gas("0x23280");
        assert_eq!(sut.gas().as_deref(), Some("0x23280"));
        assert_eq!(sut.data(), original.data());
        assert_eq!(original.gas(), &None);
    }
}
