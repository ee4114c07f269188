//! IPC transport — a persistent Unix-domain socket connection.
//!
//! Requests are newline-delimited JSON; the daemon newline-terminates its
//! responses, so each call reads exactly one line back. The connection is
//! a shared, ordered byte stream: requests and responses strictly
//! alternate, with no pipelining and no correlation-id matching — the next
//! inbound envelope is trusted to answer the last outbound request.

use std::io;
use std::path::{Path, PathBuf};

use clef_protocol::{RpcRequest, RpcResponse};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufStream};
use tokio::net::UnixStream;
use tracing::{debug, trace};

use crate::error::{ClefError, Result};
use crate::transport::{Transport, unwrap_envelope};

/// Connection to the signer's local socket (e.g. `~/.clef/clef.ipc`).
///
/// Connects eagerly at construction; there is no retry and no lazy
/// reconnect. After [`Transport::close`] every call fails with
/// [`ClefError::Closed`].
#[derive(Debug)]
pub struct IpcTransport {
    path: PathBuf,
    // None once closed.
    stream: Option<BufStream<UnixStream>>,
}

impl IpcTransport {
    /// Connect to the signer socket at `path`.
    ///
    /// A connection failure is fatal: the error is surfaced immediately
    /// and no transport is returned.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let stream = UnixStream::connect(&path)
            .await
            .map_err(|source| ClefError::Connect {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "connected to signer socket");
        Ok(Self {
            path,
            stream: Some(BufStream::new(stream)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for IpcTransport {
    async fn call(&mut self, method: &str, params: Option<Value>) -> Result<Value> {
        let stream = self.stream.as_mut().ok_or(ClefError::Closed)?;

        let req = RpcRequest::new(method, params);
        let mut wire = serde_json::to_vec(&req)?;
        wire.push(b'\n');
        debug!(method, path = %self.path.display(), "dispatching signer request over ipc");

        stream.write_all(&wire).await?;
        stream.flush().await?;

        let mut line = String::new();
        let n = stream.read_line(&mut line).await?;
        if n == 0 {
            return Err(ClefError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "signer closed the connection before responding",
            )));
        }

        trace!(method, bytes = n, "signer response received");
        let resp: RpcResponse = serde_json::from_str(&line)?;
        unwrap_envelope(resp)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            stream.shutdown().await?;
            debug!(path = %self.path.display(), "signer socket closed");
        }
        Ok(())
    }
}
