//! The typed facade — one method per signer operation.

use clef_protocol::{
    Methods, RecoverRequest, RecoverResponse, SignDataRequest, SignatureResponse,
    SignedTransaction, TransactionArgs, TypedDataRequest, VersionResponse,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::http::HttpTransport;
use crate::ipc::IpcTransport;
use crate::transport::Transport;

/// Clef signer client, generic over the transport it was built with.
///
/// Each method is a pure one-shot request/response mapping: build the
/// fixed method name and params, delegate to the transport, decode the
/// result payload into the operation's shape. No retries, no caching, no
/// reordering. Methods take `&mut self` because the IPC transport must
/// not be used for overlapping calls; wrap the client in an external lock
/// if it has to be shared.
#[derive(Debug)]
pub struct Client<T: Transport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Client over HTTP, e.g. `http://localhost:8550`.
    pub fn http(url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(url))
    }
}

impl Client<IpcTransport> {
    /// Client over the signer's local socket, e.g. `~/.clef/clef.ipc`.
    ///
    /// Fails immediately if the socket cannot be connected.
    pub async fn ipc(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::with_transport(IpcTransport::connect(path).await?))
    }
}

impl<T: Transport> Client<T> {
    /// Wrap an already-constructed transport (useful for test doubles).
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Create a new account in the signer's keystore.
    pub async fn new_account(&mut self) -> Result<String> {
        self.call_as(Methods::ACCOUNT_NEW, None).await
    }

    /// List the accounts the signer is willing to disclose.
    pub async fn list_accounts(&mut self) -> Result<Vec<String>> {
        self.call_as(Methods::ACCOUNT_LIST, None).await
    }

    /// Sign a transaction. The signer returns the raw signed bytes plus
    /// its decoded view of the transaction it actually signed.
    pub async fn sign_transaction(&mut self, tx: &TransactionArgs) -> Result<SignedTransaction> {
        let params = serde_json::to_value(tx)?;
        self.call_as(Methods::ACCOUNT_SIGN_TRANSACTION, Some(params)).await
    }

    /// Sign an arbitrary hex-encoded payload with the given account.
    pub async fn sign_data(&mut self, req: &SignDataRequest) -> Result<SignatureResponse> {
        let params = serde_json::to_value(req)?;
        self.call_as(Methods::ACCOUNT_SIGN_DATA, Some(params)).await
    }

    /// Sign an EIP-712 structured payload. The payload itself is passed
    /// through opaque; the signer interprets it.
    pub async fn sign_typed_data(&mut self, req: &TypedDataRequest) -> Result<SignatureResponse> {
        let params = serde_json::to_value(req)?;
        self.call_as(Methods::ACCOUNT_SIGN_TYPED_DATA, Some(params)).await
    }

    /// Recover the signing address from a data/signature pair.
    pub async fn ec_recover(&mut self, req: &RecoverRequest) -> Result<RecoverResponse> {
        let params = serde_json::to_value(req)?;
        self.call_as(Methods::ACCOUNT_EC_RECOVER, Some(params)).await
    }

    /// Query the signer's external API version.
    pub async fn version(&mut self) -> Result<VersionResponse> {
        self.call_as(Methods::ACCOUNT_VERSION, None).await
    }

    /// Close the underlying transport. Further calls on an IPC client
    /// fail; an HTTP client has nothing to release.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.close().await
    }

    /// One round trip plus a typed decode of the result payload.
    async fn call_as<R: DeserializeOwned>(
        &mut self,
        method: &str,
        params: Option<Value>,
    ) -> Result<R> {
        let result = self.transport.call(method, params).await?;
        Ok(serde_json::from_value(result)?)
    }
}
