use crate::{Confirmation, WalletError, WalletProvider, utils::rpc_error};
use alloy_network::{EthereumWallet, ReceiptResponse};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::{
    DynProvider, PendingTransactionBuilder, PendingTransactionError, Provider, ProviderBuilder,
    WatchTxError,
};
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use std::time::Duration;

/// A wallet backed by a JSON-RPC node.
///
/// Transactions are either signed locally by a private key signer, or handed to the node through
/// `eth_sendTransaction` when the node holds unlocked accounts.
#[derive(Clone, Debug)]
pub struct RpcWallet {
    provider: DynProvider,
    /// The local signer's address, if transactions are signed locally.
    signer: Option<Address>,
    /// The unlocked account to use, if more than one is available.
    from: Option<Address>,
}

impl RpcWallet {
    /// Connects to `url` and signs every transaction with `signer`.
    pub async fn with_signer(url: &str, signer: PrivateKeySigner) -> Result<Self, WalletError> {
        let address = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(url)
            .await
            .map_err(|err| WalletError::Unavailable(format!("{url}: {err}")))?;
        debug!(%url, signer = %address, "connected rpc wallet");
        Ok(Self { provider: provider.erased(), signer: Some(address), from: None })
    }

    /// Connects to `url` and uses the node's unlocked accounts.
    pub async fn unlocked(url: &str, from: Option<Address>) -> Result<Self, WalletError> {
        let provider = ProviderBuilder::new()
            .connect(url)
            .await
            .map_err(|err| WalletError::Unavailable(format!("{url}: {err}")))?;
        debug!(%url, ?from, "connected unlocked rpc wallet");
        Ok(Self { provider: provider.erased(), signer: None, from })
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if let Some(signer) = self.signer {
            return Ok(vec![signer]);
        }

        let accounts = self.provider.get_accounts().await.map_err(|err| match rpc_error(err) {
            WalletError::Rpc(msg) => WalletError::Unavailable(msg),
            err => err,
        })?;
        trace!(?accounts, "node accounts");
        Ok(match self.from {
            Some(from) => accounts.into_iter().filter(|account| *account == from).collect(),
            None => accounts,
        })
    }

    async fn get_balance(&self, account: Address) -> Result<U256, WalletError> {
        self.provider.get_balance(account).await.map_err(rpc_error)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        self.provider.call(tx).await.map_err(rpc_error)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        let pending = self.provider.send_transaction(tx).await.map_err(rpc_error)?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Duration,
    ) -> Result<Confirmation, WalletError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_required_confirmations(confirmations)
            .with_timeout(Some(timeout))
            .get_receipt()
            .await
            .map_err(|err| match err {
                PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
                    WalletError::Timeout { tx_hash, timeout }
                }
                PendingTransactionError::TransportError(err) => rpc_error(err),
                err => WalletError::Rpc(err.to_string()),
            })?;

        if !receipt.status() {
            return Err(WalletError::Failed(tx_hash));
        }
        Ok(Confirmation {
            tx_hash,
            block_number: receipt.block_number(),
            gas_used: receipt.gas_used(),
        })
    }
}
