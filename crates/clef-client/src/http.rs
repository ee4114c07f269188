//! HTTP transport — one POST per call, no connection state.

use clef_protocol::{RpcRequest, RpcResponse};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::Result;
use crate::transport::{Transport, unwrap_envelope};

/// Sends each request as a self-contained `POST` with a JSON body to the
/// signer's HTTP endpoint. Safe to use from multiple calls in sequence;
/// `close` is a no-op since nothing is held between calls.
pub struct HttpTransport {
    url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn call(&mut self, method: &str, params: Option<Value>) -> Result<Value> {
        let req = RpcRequest::new(method, params);
        debug!(method, url = %self.url, "dispatching signer request over http");

        // The daemon reports signing failures inside the envelope, not via
        // HTTP status, so the body is decoded regardless of status code.
        let resp: RpcResponse = self
            .http
            .post(&self.url)
            .json(&req)
            .send()
            .await?
            .json()
            .await?;

        trace!(method, is_error = resp.is_error(), "signer response received");
        unwrap_envelope(resp)
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
