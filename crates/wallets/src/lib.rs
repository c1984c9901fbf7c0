//! # swapdesk-wallets
//!
//! The wallet capability the swap client is built on.
//!
//! A [`WalletProvider`] plays the role an injected EIP-1193 provider plays in a browser: it
//! authorizes accounts, reads balances, performs read-only calls and signs and sends
//! transactions. It is always passed in explicitly, so every consumer can be driven by:
//!
//! - [`RpcWallet`]: a JSON-RPC node plus a local signer or the node's unlocked accounts,
//! - [`NoWallet`]: nothing is available, every request fails with [`WalletError::Unavailable`],
//! - `MockWallet` (feature `mock`): a scripted in-memory wallet for tests.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use std::{fmt, time::Duration};

pub mod error;
pub use error::{PrivateKeyError, WalletError};

pub mod opts;
pub use opts::WalletOpts;

mod rpc;
pub use rpc::RpcWallet;

pub mod utils;

#[cfg(feature = "mock")]
pub mod mock;

/// A transaction that reached the requested number of confirmations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

/// The requests a connected wallet answers.
#[async_trait]
pub trait WalletProvider: fmt::Debug + Send + Sync {
    /// Asks the wallet to authorize accounts, `eth_requestAccounts` style.
    ///
    /// An empty list means the wallet is reachable but nothing was authorized.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Native balance of `account`, in wei.
    async fn get_balance(&self, account: Address) -> Result<U256, WalletError>;

    /// Executes a read-only call and returns the raw return data.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError>;

    /// Signs and broadcasts `tx`, returning its hash as soon as the node accepted it.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError>;

    /// Suspends until `tx_hash` has `confirmations` confirmations or `timeout` elapses.
    ///
    /// A mined transaction with a failed status is an error.
    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Duration,
    ) -> Result<Confirmation, WalletError>;
}

/// The absence of a wallet.
#[derive(Clone, Debug)]
pub struct NoWallet {
    reason: String,
}

impl NoWallet {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn unavailable(&self) -> WalletError {
        WalletError::Unavailable(self.reason.clone())
    }
}

impl Default for NoWallet {
    fn default() -> Self {
        Self::new("no wallet provider available")
    }
}

#[async_trait]
impl WalletProvider for NoWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Err(self.unavailable())
    }

    async fn get_balance(&self, _account: Address) -> Result<U256, WalletError> {
        Err(self.unavailable())
    }

    async fn call(&self, _tx: TransactionRequest) -> Result<Bytes, WalletError> {
        Err(self.unavailable())
    }

    async fn send_transaction(&self, _tx: TransactionRequest) -> Result<TxHash, WalletError> {
        Err(self.unavailable())
    }

    async fn wait_for_confirmation(
        &self,
        _tx_hash: TxHash,
        _confirmations: u64,
        _timeout: Duration,
    ) -> Result<Confirmation, WalletError> {
        Err(self.unavailable())
    }
}
