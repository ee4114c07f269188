//! Signer method name constants.
//!
//! Each constant is the exact string sent over the wire as the `method`
//! field of a JSON-RPC request. Clef exposes its external API under the
//! `account_` namespace.

/// All signer method names.
pub struct Methods;

impl Methods {
    /// Create a new account in the signer's keystore.
    pub const ACCOUNT_NEW: &str = "account_new";
    /// List the accounts the signer is willing to disclose.
    pub const ACCOUNT_LIST: &str = "account_list";
    /// Sign a transaction; subject to interactive approval on the signer side.
    pub const ACCOUNT_SIGN_TRANSACTION: &str = "account_signTransaction";
    /// Sign an arbitrary hex-encoded payload.
    pub const ACCOUNT_SIGN_DATA: &str = "account_signData";
    /// Sign an EIP-712 structured payload.
    pub const ACCOUNT_SIGN_TYPED_DATA: &str = "account_signTypedData";
    /// Recover the signing address from a data/signature pair.
    pub const ACCOUNT_EC_RECOVER: &str = "account_ecRecover";
    /// Query the signer's external API version.
    pub const ACCOUNT_VERSION: &str = "account_version";
}

/// Returns true if the given string is a method this client knows about.
pub fn is_known_method(method: &str) -> bool {
    matches!(
        method,
        Methods::ACCOUNT_NEW
            | Methods::ACCOUNT_LIST
            | Methods::ACCOUNT_SIGN_TRANSACTION
            | Methods::ACCOUNT_SIGN_DATA
            | Methods::ACCOUNT_SIGN_TYPED_DATA
            | Methods::ACCOUNT_EC_RECOVER
            | Methods::ACCOUNT_VERSION
    )
}

/// Type alias — the method name is always a `&str` at the protocol level.
pub type MethodName = &'static str;
