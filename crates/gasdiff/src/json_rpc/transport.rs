use crate::prelude::*;

/// Delivers one [`RpcRequest`] to the node at `url` and hands back its
/// [`RpcResponse`]. Implementations must not retry.
#[async_trait::async_trait]
pub trait JsonRpcTransport {
    async fn send(&self, url: &str, request: &RpcRequest) -> Result<RpcResponse>;
}

/// JSON-RPC over HTTP POST, using `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`HttpTransport::new`] but every request fails with
    /// [`Error::Transport`] once `timeout` has passed.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(|client| Self { client })
            .map_err(Error::build_http_client)
    }
}

#[async_trait::async_trait]
impl JsonRpcTransport for HttpTransport {
    async fn send(&self, url: &str, request: &RpcRequest) -> Result<RpcResponse> {
        #[cfg(debug_assertions)]
        {
            if let Ok(json) = serde_json::to_string_pretty(request) {
                debug!("👻 Request JSON to {}: {}", url, json);
            }
        }

        // `json` sets `Content-Type: application/json`
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(url, e))?;
        let body_string: Cow<'_, str> = String::from_utf8_lossy(&body_bytes);
        debug!(
            "🔮 RAW response from {}: Status = {}, Body = {:?}",
            url, status, body_string
        );
        if !status.is_success() {
            warn!("Non success status {} from {}", status, url);
        }

        match serde_json::from_slice::<RpcResponse>(&body_bytes) {
            Ok(response) => Ok(response),
            // Providers often put their JSON-RPC error in a 4xx/5xx body, which
            // parses above. Anything else non-2xx is an HTTP-layer failure.
            Err(_) if !status.is_success() => {
                Err(Error::transport(url, format!("HTTP status {}", status)))
            }
            Err(e) => Err(Error::decode::<RpcResponse>(e)),
        }
    }
}
