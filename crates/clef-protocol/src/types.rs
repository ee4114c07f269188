//! Typed request and response shapes for each signer operation.
//!
//! Every quantity is a `0x`-prefixed hex string; the client never parses
//! or validates them. Optional fields are skipped during serialization so
//! an unset field is absent from the wire rather than an empty string —
//! Clef distinguishes "not provided" from "provided empty".

use serde::{Deserialize, Serialize};

/// Transaction to be signed via `account_signTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionArgs {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(rename = "gasPrice", skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Result of `account_signTransaction`: the RLP-encoded raw transaction
/// plus the signer's decoded view of what it signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub raw: String,
    pub tx: TransactionDetails,
}

/// Decoded fields of a signed transaction, echoed back by the signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub nonce: String,
    #[serde(rename = "gasPrice")]
    pub gas_price: String,
    pub gas: String,
    pub to: String,
    pub value: String,
    pub input: String,
    pub v: String,
    pub r: String,
    pub s: String,
    pub hash: String,
}

/// Parameters for `account_signData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignDataRequest {
    pub address: String,
    pub data: String,
}

/// Parameters for `account_signTypedData`.
///
/// The typed-data payload is an opaque EIP-712 document; it is carried as
/// raw JSON and never interpreted by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataRequest {
    pub address: String,
    #[serde(rename = "data")]
    pub typed_data: serde_json::Value,
    #[serde(rename = "raw_version", skip_serializing_if = "Option::is_none")]
    pub raw_version: Option<String>,
}

/// Result of `account_signData` and `account_signTypedData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureResponse {
    pub signature: String,
}

/// Parameters for `account_ecRecover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverRequest {
    pub data: String,
    pub sig: String,
}

/// Result of `account_ecRecover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverResponse {
    pub address: String,
}

/// Result of `account_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}
