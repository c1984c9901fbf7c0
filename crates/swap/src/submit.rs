use crate::{
    error::{RequestError, SwapError},
    quote::QuoteClient,
    request::SwapRequest,
    router,
    session::Session,
    slippage::Slippage,
    units::Amount,
};
use alloy_primitives::{TxHash, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use std::{sync::Arc, time::Duration};
use swapdesk_wallets::WalletProvider;

/// A confirmed swap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapReceipt {
    pub tx_hash: TxHash,
    /// The quote read right before sending.
    pub quoted: Amount,
    /// The `amountOutMin` the router enforced.
    pub amount_out_min: Amount,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

/// Sends swaps to the router, guarded by a minimum output.
#[derive(Clone, Debug)]
pub struct SwapSubmitter {
    wallet: Arc<dyn WalletProvider>,
    quotes: QuoteClient,
    slippage: Slippage,
    confirmations: u64,
    timeout: Duration,
}

impl SwapSubmitter {
    pub fn new(
        wallet: Arc<dyn WalletProvider>,
        quotes: QuoteClient,
        slippage: Slippage,
        confirmations: u64,
        timeout: Duration,
    ) -> Self {
        Self { wallet, quotes, slippage, confirmations, timeout }
    }

    /// Executes `request` for the session's account and waits for it to be confirmed.
    ///
    /// The request is quoted again first. `reference` is the quote the user saw for this exact
    /// request, if any; the fresh quote stands in for it otherwise. The swap is not sent when the
    /// fresh quote is already below the minimum derived from `reference`.
    pub async fn submit(
        &self,
        session: &Session,
        request: &SwapRequest,
        reference: Option<U256>,
    ) -> Result<SwapReceipt, SwapError> {
        let account = session.account.ok_or_else(|| SwapError::swap(RequestError::NotConnected))?;
        let decimals = request.amount_in.decimals();

        let fresh = self.quotes.amount_out(session, request).await.map_err(SwapError::swap)?;
        let reference = reference.unwrap_or(fresh);
        let min_out = self.slippage.min_output(reference);
        if fresh < min_out {
            return Err(SwapError::swap(format!(
                "price moved beyond the {} slippage tolerance: quoted {}, now {}, minimum {}",
                self.slippage,
                Amount::new(reference, decimals),
                Amount::new(fresh, decimals),
                Amount::new(min_out, decimals),
            )));
        }

        let tx = TransactionRequest::default()
            .from(account)
            .to(self.quotes.router())
            .input(TransactionInput::new(router::swap(request, min_out, account)));
        debug!(?request, %min_out, %fresh, "sending swap");
        let tx_hash = self.wallet.send_transaction(tx).await.map_err(SwapError::swap)?;

        debug!(%tx_hash, confirmations = self.confirmations, "waiting for swap confirmation");
        let confirmation = self
            .wallet
            .wait_for_confirmation(tx_hash, self.confirmations, self.timeout)
            .await
            .map_err(SwapError::swap)?;

        Ok(SwapReceipt {
            tx_hash,
            quoted: Amount::new(fresh, decimals),
            amount_out_min: Amount::new(min_out, decimals),
            block_number: confirmation.block_number,
            gas_used: confirmation.gas_used,
        })
    }
}
