//! A scripted in-memory wallet.
//!
//! Contract behavior is supplied as closures over the raw [`TransactionRequest`], so the wallet
//! itself knows nothing about any particular contract.

use crate::{Confirmation, WalletError, WalletProvider};
use alloy_primitives::{Address, B256, Bytes, TxHash, U256};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::{collections::VecDeque, fmt, time::Duration};

type CallHandler = Box<dyn Fn(&TransactionRequest) -> Result<Bytes, WalletError> + Send + Sync>;
type SendHandler = Box<dyn Fn(&TransactionRequest) -> Result<(), WalletError> + Send + Sync>;

/// What the wallet grants when asked for accounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockAccess {
    /// The wallet is present and authorizes `account`.
    Authorized { account: Address },
    /// The wallet is present but the user refuses authorization.
    Unauthorized,
    /// There is no wallet at all.
    Unavailable,
}

pub struct MockWallet {
    access: MockAccess,
    balance: Mutex<U256>,
    balance_error: Mutex<Option<WalletError>>,
    on_call: Option<CallHandler>,
    on_send: Option<SendHandler>,
    confirmation_error: Option<WalletError>,
    call_delays: Mutex<VecDeque<Duration>>,
    calls: Mutex<Vec<TransactionRequest>>,
    sent: Mutex<Vec<TransactionRequest>>,
    nonce: Mutex<u8>,
}

impl fmt::Debug for MockWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockWallet")
            .field("access", &self.access)
            .field("balance", &*self.balance.lock())
            .field("calls", &self.calls.lock().len())
            .field("sent", &self.sent.lock().len())
            .finish_non_exhaustive()
    }
}

impl MockWallet {
    pub fn new(access: MockAccess) -> Self {
        Self {
            access,
            balance: Mutex::new(U256::ZERO),
            balance_error: Mutex::new(None),
            on_call: None,
            on_send: None,
            confirmation_error: None,
            call_delays: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            nonce: Mutex::new(0),
        }
    }

    /// A wallet that authorizes `account` holding `balance` wei.
    pub fn authorized(account: Address, balance: U256) -> Self {
        let wallet = Self::new(MockAccess::Authorized { account });
        *wallet.balance.lock() = balance;
        wallet
    }

    pub fn unauthorized() -> Self {
        Self::new(MockAccess::Unauthorized)
    }

    pub fn unavailable() -> Self {
        Self::new(MockAccess::Unavailable)
    }

    /// Answers every `eth_call` with `handler`.
    pub fn with_call_handler(
        mut self,
        handler: impl Fn(&TransactionRequest) -> Result<Bytes, WalletError> + Send + Sync + 'static,
    ) -> Self {
        self.on_call = Some(Box::new(handler));
        self
    }

    /// Decides with `handler` whether a sent transaction is accepted.
    pub fn with_send_handler(
        mut self,
        handler: impl Fn(&TransactionRequest) -> Result<(), WalletError> + Send + Sync + 'static,
    ) -> Self {
        self.on_send = Some(Box::new(handler));
        self
    }

    /// Makes every confirmation wait fail with `err`.
    pub fn with_confirmation_error(mut self, err: WalletError) -> Self {
        self.confirmation_error = Some(err);
        self
    }

    /// Delays the next calls, one entry per call, in order.
    pub fn with_call_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        self.call_delays.lock().extend(delays);
        self
    }

    pub fn set_balance(&self, balance: U256) {
        *self.balance.lock() = balance;
    }

    /// Makes every balance query from now on fail with `err`.
    pub fn fail_balance(&self, err: WalletError) {
        *self.balance_error.lock() = Some(err);
    }

    /// All read-only calls received so far.
    pub fn calls(&self) -> Vec<TransactionRequest> {
        self.calls.lock().clone()
    }

    /// All transactions accepted so far.
    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().clone()
    }

    fn not_detected() -> WalletError {
        WalletError::Unavailable("no wallet provider detected".to_string())
    }

    fn ensure_available(&self) -> Result<(), WalletError> {
        match self.access {
            MockAccess::Unavailable => Err(Self::not_detected()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        match &self.access {
            MockAccess::Authorized { account } => Ok(vec![*account]),
            MockAccess::Unauthorized => {
                Err(WalletError::Rejected("User rejected the request.".to_string()))
            }
            MockAccess::Unavailable => Err(Self::not_detected()),
        }
    }

    async fn get_balance(&self, _account: Address) -> Result<U256, WalletError> {
        self.ensure_available()?;
        if let Some(err) = self.balance_error.lock().clone() {
            return Err(err);
        }
        Ok(*self.balance.lock())
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        self.ensure_available()?;
        self.calls.lock().push(tx.clone());

        let delay = self.call_delays.lock().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match &self.on_call {
            Some(handler) => handler(&tx),
            None => Err(WalletError::Reverted("execution reverted".to_string())),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        self.ensure_available()?;
        if let Some(handler) = &self.on_send {
            handler(&tx)?;
        }
        self.sent.lock().push(tx);

        let mut nonce = self.nonce.lock();
        *nonce += 1;
        Ok(B256::with_last_byte(*nonce))
    }

    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        _confirmations: u64,
        _timeout: Duration,
    ) -> Result<Confirmation, WalletError> {
        self.ensure_available()?;
        if let Some(err) = &self.confirmation_error {
            return Err(err.clone());
        }
        Ok(Confirmation { tx_hash, block_number: Some(1), gas_used: 21_000 })
    }
}
