use crate::prelude::*;

/// The `error` member of a failed JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A JSON-RPC 2.0 response, `result` semantics depend on the method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Pairs this response with the request it answers and returns its
    /// `result`.
    ///
    /// # Throws
    /// - [`Error::MismatchedResponseId`] if the response carries another id.
    /// - [`Error::Rpc`] if the node answered with an error object.
    /// - [`Error::Decode`] if there is no `error` and `result` is null or missing.
    pub fn into_result_for(self, request_id: u64) -> Result<Value> {
        match &self.id {
            None | Some(Value::Null) => {}
            Some(id) if id.as_u64() == Some(request_id) => {}
            Some(other) => {
                return Err(Error::MismatchedResponseId {
                    expected: request_id,
                    found: other.to_string(),
                });
            }
        }
        if let Some(error) = self.error {
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        self.result.ok_or_else(|| {
            Error::decode::<Self>("`result` is null or missing and there is no `error`")
        })
    }
}
