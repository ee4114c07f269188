//! JSON-RPC 2.0 envelope types for the signer wire protocol.

use serde::{Deserialize, Serialize};

use crate::error::RpcError;

/// Protocol version tag carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request envelope.
///
/// `params` is omitted from the serialized form entirely when `None`
/// (no-argument calls like `account_new` send no `params` key at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    pub id: i64,
}

/// JSON-RPC 2.0 response envelope.
///
/// A populated `error` means the response carries no usable result; the
/// two fields are never consumed together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
    pub id: i64,
}

impl RpcRequest {
    /// Build a request envelope for `method`.
    ///
    /// The correlation id is fixed at `1`: calls are strictly sequential
    /// per connection, so responses never need to be matched out of order.
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: method.into(),
            params,
            id: 1,
        }
    }

    /// Validate that this is a well-formed JSON-RPC 2.0 request.
    pub fn is_valid(&self) -> bool {
        self.jsonrpc == JSONRPC_VERSION && !self.method.is_empty()
    }
}

impl RpcResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Consume the envelope, yielding the result payload or the error record.
    ///
    /// An envelope with a populated error record never yields a result. A
    /// success envelope with no `result` key yields `Value::Null` (the
    /// caller's typed decode decides whether that is acceptable).
    pub fn into_result(self) -> Result<serde_json::Value, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result.unwrap_or(serde_json::Value::Null)),
        }
    }
}
