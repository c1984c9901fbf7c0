use crate::{WalletError, error::PrivateKeyError};
use alloy_primitives::{B256, hex::FromHex};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::{GenericContractError, RevertReason};
use alloy_transport::TransportError;

/// EIP-1193 error code for a request the user refused.
pub const USER_REJECTED_REQUEST: i64 = 4001;

fn ensure_pk_not_env(pk: &str) -> Result<(), PrivateKeyError> {
    if !pk.starts_with("0x") && std::env::var(pk).is_ok() {
        return Err(PrivateKeyError::ExistsAsEnvVar(pk.to_string()));
    }
    Ok(())
}

/// Validates and sanitizes user inputs, returning the configured local signer.
pub fn create_private_key_signer(
    private_key_str: &str,
) -> Result<PrivateKeySigner, PrivateKeyError> {
    let private_key = match B256::from_hex(private_key_str.trim()) {
        Ok(pk) => pk,
        Err(err) => {
            ensure_pk_not_env(private_key_str)?;
            return Err(err.into());
        }
    };
    PrivateKeySigner::from_bytes(&private_key).map_err(|err| {
        ensure_pk_not_env(private_key_str)
            .err()
            .unwrap_or_else(|| PrivateKeyError::InvalidKey(err.to_string()))
    })
}

/// Reduces a JSON-RPC failure to what the wallet user should see.
///
/// Revert data is decoded when the node returns it, so `Error(string)` reverts surface as the
/// bare reason string. Data that is not a known error keeps the node's message.
pub fn rpc_error(err: TransportError) -> WalletError {
    let Some(payload) = err.as_error_resp() else {
        return WalletError::Rpc(err.to_string());
    };
    let message = payload.message.to_string();

    if payload.code == USER_REJECTED_REQUEST {
        return WalletError::Rejected(message);
    }

    if let Some(data) = payload.as_revert_data() {
        let reason = match RevertReason::decode(&data) {
            Some(RevertReason::ContractError(GenericContractError::Revert(revert))) => {
                revert.reason
            }
            Some(RevertReason::ContractError(err)) => err.to_string(),
            // undecodable data, even if it happens to be valid UTF-8
            Some(RevertReason::RawString(_)) | None => message,
        };
        return WalletError::Reverted(reason);
    }

    if message.contains("revert") {
        return WalletError::Reverted(message);
    }

    WalletError::Rpc(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_json_rpc::{ErrorPayload, RpcError};
    use alloy_primitives::hex;
    use alloy_sol_types::{Revert, SolError};

    fn error_resp(json: &str) -> TransportError {
        RpcError::ErrorResp(serde_json::from_str::<ErrorPayload>(json).unwrap())
    }

    #[test]
    fn parse_private_key_signer() {
        let pk = B256::random();
        let pk_str = pk.to_string();
        assert!(create_private_key_signer(&pk_str).is_ok());
        // skip 0x
        assert!(create_private_key_signer(&pk_str[2..]).is_ok());
    }

    #[test]
    fn private_key_named_like_env_var() {
        let err = create_private_key_signer("PATH").unwrap_err();
        assert!(matches!(err, PrivateKeyError::ExistsAsEnvVar(ref var) if var == "PATH"), "{err}");

        let err = create_private_key_signer("0xnothex").unwrap_err();
        assert!(matches!(err, PrivateKeyError::InvalidHex(_)), "{err}");
    }

    #[test]
    fn decodes_revert_string() {
        let data = Revert { reason: "INSUFFICIENT_OUTPUT_AMOUNT".to_string() }.abi_encode();
        let err = error_resp(&format!(
            r#"{{"code":3,"message":"execution reverted","data":"{}"}}"#,
            hex::encode_prefixed(data)
        ));
        assert_eq!(rpc_error(err), WalletError::Reverted("INSUFFICIENT_OUTPUT_AMOUNT".to_string()));
    }

    #[test]
    fn unknown_revert_data_keeps_message() {
        // a custom error selector that is valid UTF-8, and one that is not
        for data in ["0x12345678", "0xdeadbeef"] {
            let err = error_resp(&format!(
                r#"{{"code":3,"message":"execution reverted","data":"{data}"}}"#
            ));
            assert_eq!(rpc_error(err), WalletError::Reverted("execution reverted".to_string()));
        }
    }

    #[test]
    fn revert_without_data_keeps_message() {
        let err = error_resp(r#"{"code":-32000,"message":"execution reverted: PAIR_NOT_FOUND"}"#);
        assert_eq!(
            rpc_error(err),
            WalletError::Reverted("execution reverted: PAIR_NOT_FOUND".to_string())
        );
    }

    #[test]
    fn user_rejection() {
        let err = error_resp(r#"{"code":4001,"message":"User rejected the request."}"#);
        assert_eq!(rpc_error(err), WalletError::Rejected("User rejected the request.".to_string()));
    }

    #[test]
    fn other_errors_are_passed_through() {
        let err = error_resp(r#"{"code":-32601,"message":"method not found"}"#);
        assert_eq!(rpc_error(err), WalletError::Rpc("method not found".to_string()));
    }
}
