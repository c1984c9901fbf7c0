//! A scripted router on top of the mock wallet.

use alloy_primitives::{Address, U256, address};
use alloy_sol_types::SolCall;
use parking_lot::Mutex;
use std::sync::Arc;
use swapdesk::{SwapSettings, ViewStateController, router::ISwapRouter};
use swapdesk_wallets::{WalletError, mock::MockWallet};

pub const ALICE: Address = address!("0x000000000000000000000000000000000000abc0");
pub const ROUTER: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
pub const T1: &str = "0x1111111111111111111111111111111111111111";
pub const T2: &str = "0x2222222222222222222222222222222222222222";

pub const ETHER: u64 = 1_000_000_000_000_000_000;

/// Output per input token, in basis points.
#[derive(Clone, Debug)]
pub struct Price(Arc<Mutex<u64>>);

impl Price {
    pub fn new(bps: u64) -> Self {
        Self(Arc::new(Mutex::new(bps)))
    }

    pub fn set(&self, bps: u64) {
        *self.0.lock() = bps;
    }

    pub fn quote(&self, amount_in: U256) -> U256 {
        amount_in * U256::from(*self.0.lock()) / U256::from(10_000)
    }
}

/// A wallet authorizing [`ALICE`] with `balance` wei, in front of a router quoting at `price`.
pub fn market(balance: U256, price: &Price) -> MockWallet {
    let price = price.clone();
    MockWallet::authorized(ALICE, balance).with_call_handler(move |tx| {
        let input = tx.input.input().cloned().unwrap_or_default();
        let call = ISwapRouter::getAmountOutCall::abi_decode(&input)
            .map_err(|err| WalletError::Reverted(err.to_string()))?;
        Ok(ISwapRouter::getAmountOutCall::abi_encode_returns(&price.quote(call.amountIn)).into())
    })
}

pub async fn connected(wallet: Arc<MockWallet>) -> ViewStateController {
    let controller = ViewStateController::new(wallet, &SwapSettings::new(ROUTER));
    controller.initialize().await;
    controller
}

pub fn fill(controller: &ViewStateController, amount: &str) {
    controller.set_token_in(T1);
    controller.set_token_out(T2);
    controller.set_amount(amount);
}

/// The `swap` calls the wallet accepted.
pub fn sent_swaps(wallet: &MockWallet) -> Vec<ISwapRouter::swapCall> {
    wallet
        .sent()
        .iter()
        .map(|tx| {
            let input = tx.input.input().cloned().unwrap_or_default();
            ISwapRouter::swapCall::abi_decode(&input).unwrap()
        })
        .collect()
}
