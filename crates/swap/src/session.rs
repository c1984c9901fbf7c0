//! Wallet connection.

use crate::{error::SwapError, units::Amount};
use alloy_primitives::{Address, U256};
use std::sync::Arc;
use swapdesk_wallets::{WalletError, WalletProvider};

/// The connected account and its native balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub account: Option<Address>,
    /// Native balance in wei.
    pub balance: U256,
}

impl Session {
    /// The balance, if an account is connected.
    pub fn balance(&self) -> Option<Amount> {
        self.account.map(|_| Amount::native(self.balance))
    }
}

/// Obtains an authorized account and its balance from the wallet.
#[derive(Clone, Debug)]
pub struct WalletConnector {
    wallet: Arc<dyn WalletProvider>,
    /// The account to pick among the authorized ones.
    sender: Option<Address>,
}

impl WalletConnector {
    pub fn new(wallet: Arc<dyn WalletProvider>, sender: Option<Address>) -> Self {
        Self { wallet, sender }
    }

    pub fn wallet(&self) -> &Arc<dyn WalletProvider> {
        &self.wallet
    }

    /// Requests authorization and reads the balance of the authorized account.
    pub async fn connect(&self) -> Result<Session, SwapError> {
        let accounts = self.wallet.request_accounts().await.map_err(SwapError::wallet)?;
        debug!(?accounts, "wallet authorized accounts");

        let account = match self.sender {
            Some(sender) => accounts.into_iter().find(|account| *account == sender).ok_or_else(
                || SwapError::wallet(format!("account {sender} was not authorized by the wallet")),
            )?,
            None => accounts
                .into_iter()
                .next()
                .ok_or_else(|| SwapError::wallet(WalletError::Unauthorized))?,
        };

        let balance = self.balance_of(account).await?;
        debug!(%account, %balance, "connected");
        Ok(Session { account: Some(account), balance })
    }

    /// Reads the native balance of `account`.
    pub async fn balance_of(&self, account: Address) -> Result<U256, SwapError> {
        self.wallet.get_balance(account).await.map_err(SwapError::wallet)
    }
}
