use crate::prelude::*;

/// A trait for types that can be used as RPC requests.
///
/// Returns the method name, the parameter type and the type the
/// `result` of the response decodes into.
pub trait IsRpcRequest {
    /// The input parameter type for the RPC method.
    type Param: Serialize;
    /// The `result` type of a successful response.
    type Output: DeserializeOwned;
    /// The RPC method name.
    fn method() -> String;
}

/// `web3_clientVersion`, takes no params and answers with
/// e.g. `"Geth/v1.12.0-stable-e501b3b0/linux-amd64/go1.20.3"`.
pub struct ClientVersionRequest;

impl IsRpcRequest for ClientVersionRequest {
    type Param = ();
    type Output = String;
    fn method() -> String {
        "web3_clientVersion".to_owned()
    }
}
