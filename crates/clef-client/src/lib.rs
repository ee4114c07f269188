//! Clef signer client.
//!
//! A small JSON-RPC 2.0 client for the Clef external signer, usable over
//! two transports:
//! - **HTTP** — one POST per call, no connection state between calls.
//! - **IPC** — a persistent Unix-domain socket connection with
//!   newline-delimited requests and strict request/response alternation.
//!
//! The client is a pure protocol shuttle: it serializes typed requests,
//! performs one synchronous round trip per operation, and decodes typed
//! responses. It never validates, verifies, or interprets the payloads it
//! carries.
//!
//! ```no_run
//! use clef_client::Client;
//!
//! # async fn demo() -> clef_client::Result<()> {
//! let mut signer = Client::ipc("/home/user/.clef/clef.ipc").await?;
//! let address = signer.new_account().await?;
//! println!("created {address}");
//! signer.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod ipc;
pub mod transport;

pub use client::Client;
pub use error::{ClefError, Result};
pub use http::HttpTransport;
pub use ipc::IpcTransport;
pub use transport::Transport;
