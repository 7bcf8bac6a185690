use crate::prelude::*;

/// Performs JSON-RPC 2.0 calls against any endpoint URL.
///
/// One client is shared by all endpoints of a comparison, it holds no
/// per-endpoint state besides the request id counter.
pub struct JsonRpcClient {
    transport: Arc<dyn JsonRpcTransport + Send + Sync>,
    id_stepper: IdStepper,
}

impl JsonRpcClient {
    pub fn new(transport: Arc<dyn JsonRpcTransport + Send + Sync>) -> Self {
        Self {
            transport,
            id_stepper: IdStepper::default(),
        }
    }

    /// A client talking HTTP, optionally bounding each request by `timeout`.
    pub fn http(timeout: Option<Duration>) -> Result<Self> {
        let transport = match timeout {
            Some(timeout) => HttpTransport::with_timeout(timeout)?,
            None => HttpTransport::new(),
        };
        Ok(Self::new(Arc::new(transport)))
    }
}

// ========================================
// Public Implementation
// ========================================
impl JsonRpcClient {
    /// Sends `method` with `params` to `url` and returns the `result`
    /// member of the response.
    ///
    /// # Throws
    /// - [`Error::Transport`] if the node could not be reached.
    /// - [`Error::Decode`] if the body is not a JSON-RPC response.
    /// - [`Error::Rpc`] if the node answered with an error object.
    pub async fn request(
        &self,
        url: &str,
        method: impl Into<String>,
        params: Vec<Value>,
    ) -> Result<Value> {
        let request = RpcRequest::new(self.id_stepper.next(), method, params);
        let response = self.transport.send(url, &request).await?;
        response.into_result_for(request.id())
    }

    /// Typed version of [`JsonRpcClient::request`], the method name and
    /// result type are given by `Req`.
    pub async fn call<Req>(
        &self,
        url: &str,
        params: impl IntoIterator<Item = Req::Param>,
    ) -> Result<Req::Output>
    where
        Req: IsRpcRequest,
    {
        let params = params
            .into_iter()
            .map(|param| serde_json::to_value(param).map_err(Error::encode))
            .collect::<Result<Vec<Value>>>()?;
        let result = self.request(url, Req::method(), params).await?;
        serde_json::from_value(result).map_err(Error::decode::<Req::Output>)
    }

    /// `web3_clientVersion` of the node at `url`.
    pub async fn client_version(&self, url: &str) -> Result<String> {
        self.call::<ClientVersionRequest>(url, std::iter::empty())
            .await
    }

    /// `eth_estimateGas` of `payload` by the node at `url`.
    pub async fn estimate_gas(&self, url: &str, payload: &TransactionPayload) -> Result<Gas> {
        let quantity = self
            .call::<TransactionPayload>(url, [payload.clone()])
            .await?;
        Gas::from_hex_quantity(quantity)
    }
}
