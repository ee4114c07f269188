//! The transport capability shared by the HTTP and IPC variants.

use clef_protocol::RpcResponse;
use serde_json::Value;

use crate::error::{ClefError, Result};

/// One request/response channel to the signer.
///
/// Both variants construct identical envelopes and translate errors the
/// same way; they differ only in how bytes reach the remote side. `call`
/// takes `&mut self` because the IPC variant is a shared, ordered byte
/// stream: each call must fully complete (write request, read matching
/// response) before the next begins. Sharing one transport instance
/// across threads requires external serialization.
pub trait Transport: Send {
    /// Perform one full round trip and return the result payload.
    ///
    /// Fails with [`ClefError::Rpc`] if the signer's envelope carries a
    /// populated error record; a usable result is never returned alongside
    /// an error.
    fn call(
        &mut self,
        method: &str,
        params: Option<Value>,
    ) -> impl std::future::Future<Output = Result<Value>> + Send;

    /// Release any held resource. Calling `call` after `close` fails on
    /// connection-oriented transports; it never hangs or panics.
    fn close(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Unwrap a response envelope into its result payload, translating a
/// populated error record into a client-visible failure.
pub(crate) fn unwrap_envelope(resp: RpcResponse) -> Result<Value> {
    resp.into_result().map_err(ClefError::Rpc)
}
