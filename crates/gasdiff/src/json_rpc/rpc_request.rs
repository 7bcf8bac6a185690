use crate::prelude::*;

/// A JSON-RPC 2.0 request, built once per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct RpcRequest {
    #[getset(get_copy = "pub")]
    id: u64,
    #[getset(get = "pub")]
    jsonrpc: String,
    #[getset(get = "pub")]
    method: String,
    #[getset(get = "pub")]
    params: Vec<Value>,
}

impl RpcRequest {
    pub const VERSION: &'static str = "2.0";

    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            id,
            jsonrpc: Self::VERSION.to_owned(),
            method: method.into(),
            params,
        }
    }
}
