use alloy_primitives::{TxHash, hex::FromHexError};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PrivateKeyError {
    #[error("Failed to create wallet from private key. Private key is invalid hex: {0}")]
    InvalidHex(#[from] FromHexError),
    #[error(
        "Failed to create wallet from private key. Invalid private key. But env var {0} exists. Is the `$` anchor missing?"
    )]
    ExistsAsEnvVar(String),
    #[error("Failed to create wallet from private key: {0}")]
    InvalidKey(String),
}

/// A failed wallet request.
///
/// Messages that originate outside this process (revert reasons, node errors, wallet
/// rejections) are displayed verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("{0}")]
    Unavailable(String),
    #[error("the wallet did not authorize any account")]
    Unauthorized,
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Reverted(String),
    #[error("transaction {0} failed on-chain")]
    Failed(TxHash),
    #[error("transaction {tx_hash} was not confirmed within {}s", timeout.as_secs())]
    Timeout { tx_hash: TxHash, timeout: Duration },
    #[error("{0}")]
    Rpc(String),
}
