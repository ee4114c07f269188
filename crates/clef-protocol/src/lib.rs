//! Clef signer protocol types.
//!
//! JSON-RPC 2.0 compatible types for talking to a Clef external signer.
//! This crate is the single source of truth for the envelope shapes, the
//! `account_*` method names, error codes, and the typed request/response
//! records each signer operation exchanges.

pub mod error;
pub mod jsonrpc;
pub mod methods;
pub mod types;

pub use error::{RpcError, RpcErrorCode};
pub use jsonrpc::{JSONRPC_VERSION, RpcRequest, RpcResponse};
pub use methods::{MethodName, Methods};
pub use types::{
    RecoverRequest, RecoverResponse, SignDataRequest, SignatureResponse, SignedTransaction,
    TransactionArgs, TransactionDetails, TypedDataRequest, VersionResponse,
};
