//! Client-visible error taxonomy.
//!
//! Four failure classes, kept distinct so callers can tell a dead channel
//! from a signer that refused the request from a payload the client could
//! not make sense of. Nothing is retried or recovered internally; every
//! failure propagates to the immediate caller.

use std::path::PathBuf;

use clef_protocol::RpcError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClefError>;

#[derive(Debug, Error)]
pub enum ClefError {
    /// The IPC transport could not connect at construction time.
    #[error("failed to create IPC transport at {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP layer failed: connection refused, timeout, malformed body.
    #[error("http transport failure: {0}")]
    Http(#[from] reqwest::Error),

    /// The socket connection failed mid-call.
    #[error("ipc transport failure: {0}")]
    Io(#[from] std::io::Error),

    /// The signer returned a well-formed envelope with a populated error
    /// record. The remote message is surfaced verbatim.
    #[error("signer error: {0}")]
    Rpc(RpcError),

    /// The result payload (or the envelope itself) did not match the
    /// expected shape.
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),

    /// A call was issued on a transport that was already closed.
    #[error("transport is closed")]
    Closed,
}

impl ClefError {
    /// The remote error record, if this failure came from the signer.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }
}
