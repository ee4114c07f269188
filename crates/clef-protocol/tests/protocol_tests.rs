//! Protocol layer tests — envelope serialization, error codes, method names,
//! and the wire shapes of the signer request types.

#[cfg(test)]
mod tests {
    use clef_protocol::methods::is_known_method;
    use clef_protocol::*;
    use serde_json::json;

    // ─────────────────────────────────────────────────────────────────────
    // RpcRequest
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn request_roundtrip() {
        let req = RpcRequest::new(
            Methods::ACCOUNT_SIGN_DATA,
            Some(json!({"address": "0x01", "data": "0x02"})),
        );
        let json_str = serde_json::to_string(&req).unwrap();
        let parsed: RpcRequest = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed, req);
        assert_eq!(parsed.method, "account_signData");
        assert_eq!(parsed.id, 1);
        assert!(parsed.is_valid());
    }

    #[test]
    fn request_without_params_omits_key() {
        let req = RpcRequest::new(Methods::ACCOUNT_NEW, None);
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["method"], "account_new");
        assert!(wire.get("params").is_none());
    }

    #[test]
    fn request_invalid_version() {
        let req = RpcRequest {
            jsonrpc: "1.0".into(),
            method: "account_new".into(),
            params: None,
            id: 1,
        };
        assert!(!req.is_valid());
    }

    #[test]
    fn request_empty_method_invalid() {
        let req = RpcRequest::new("", None);
        assert!(!req.is_valid());
    }

    // ─────────────────────────────────────────────────────────────────────
    // RpcResponse
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn response_success_into_result() {
        let wire = r#"{"jsonrpc":"2.0","result":"0x01","error":null,"id":1}"#;
        let resp: RpcResponse = serde_json::from_str(wire).unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.into_result().unwrap(), json!("0x01"));
    }

    #[test]
    fn response_error_never_yields_result() {
        // Misbehaving server that populates both fields: the error wins.
        let wire = r#"{"jsonrpc":"2.0","result":"0x01","error":{"code":-32000,"message":"unknown account"},"id":1}"#;
        let resp: RpcResponse = serde_json::from_str(wire).unwrap();
        assert!(resp.is_error());
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.code, -32000);
        assert_eq!(err.message, "unknown account");
    }

    #[test]
    fn response_missing_result_decodes_as_null() {
        let wire = r#"{"jsonrpc":"2.0","id":1}"#;
        let resp: RpcResponse = serde_json::from_str(wire).unwrap();
        assert_eq!(resp.into_result().unwrap(), serde_json::Value::Null);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Error codes
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn error_code_mapping_roundtrips() {
        for code in [-32700, -32600, -32601, -32602, -32603, -32000] {
            assert_eq!(RpcErrorCode::from_code(code).code(), code);
        }
        assert_eq!(RpcErrorCode::from_code(-31999), RpcErrorCode::Custom(-31999));
    }

    #[test]
    fn error_display_carries_remote_message() {
        let err = RpcError::new(RpcErrorCode::ServerError, "unknown account");
        assert!(err.to_string().contains("unknown account"));
        assert_eq!(err.error_code(), RpcErrorCode::ServerError);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Methods
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn known_methods() {
        assert!(is_known_method("account_new"));
        assert!(is_known_method("account_signTransaction"));
        assert!(is_known_method("account_version"));
        assert!(!is_known_method("account_export"));
        assert!(!is_known_method(""));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Domain shapes
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn transaction_unset_fields_absent_from_wire() {
        let tx = TransactionArgs {
            from: "0x0000000000000000000000000000000000000001".into(),
            to: "0x0000000000000000000000000000000000000002".into(),
            ..Default::default()
        };
        let wire = serde_json::to_value(&tx).unwrap();
        assert_eq!(wire["from"], "0x0000000000000000000000000000000000000001");
        assert!(wire.get("gas").is_none());
        assert!(wire.get("gasPrice").is_none());
        assert!(wire.get("value").is_none());
        assert!(wire.get("nonce").is_none());
        assert!(wire.get("data").is_none());
    }

    #[test]
    fn transaction_set_fields_use_wire_names() {
        let tx = TransactionArgs {
            from: "0x01".into(),
            to: "0x02".into(),
            gas: Some("0x5208".into()),
            gas_price: Some("0x4a817c800".into()),
            value: Some("0xde0b6b3a7640000".into()),
            nonce: Some("0x0".into()),
            data: Some("0x".into()),
        };
        let wire = serde_json::to_value(&tx).unwrap();
        assert_eq!(wire["gasPrice"], "0x4a817c800");
        assert_eq!(wire["gas"], "0x5208");
        assert_eq!(wire["data"], "0x");
    }

    #[test]
    fn signed_transaction_decodes_signer_reply() {
        let wire = json!({
            "raw": "0xd46e8dd67c5d32be8d46e8dd67c5d32be8",
            "tx": {
                "nonce": "0x0",
                "gasPrice": "0x4a817c800",
                "gas": "0x5208",
                "to": "0x0000000000000000000000000000000000000002",
                "value": "0xde0b6b3a7640000",
                "input": "0x",
                "v": "0x25",
                "r": "0x4f35",
                "s": "0x6f7e",
                "hash": "0x1234"
            }
        });
        let signed: SignedTransaction = serde_json::from_value(wire).unwrap();
        assert_eq!(signed.raw, "0xd46e8dd67c5d32be8d46e8dd67c5d32be8");
        assert_eq!(signed.tx.gas_price, "0x4a817c800");
        assert_eq!(signed.tx.hash, "0x1234");
    }

    #[test]
    fn typed_data_payload_is_carried_opaque() {
        let payload = json!({
            "types": {"EIP712Domain": [{"name": "name", "type": "string"}]},
            "primaryType": "Person",
            "domain": {"name": "Test"},
            "message": {"name": "John Doe"}
        });
        let req = TypedDataRequest {
            address: "0x01".into(),
            typed_data: payload.clone(),
            raw_version: Some("V4".into()),
        };
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["data"], payload);
        assert_eq!(wire["raw_version"], "V4");
    }

    #[test]
    fn typed_data_version_absent_when_unset() {
        let req = TypedDataRequest {
            address: "0x01".into(),
            typed_data: json!({}),
            raw_version: None,
        };
        let wire = serde_json::to_value(&req).unwrap();
        assert!(wire.get("raw_version").is_none());
    }

    #[test]
    fn recover_request_uses_sig_wire_name() {
        let req = RecoverRequest {
            data: "0x48656c6c6f".into(),
            sig: "0x4f35".into(),
        };
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["sig"], "0x4f35");
        assert_eq!(wire["data"], "0x48656c6c6f");
    }
}
