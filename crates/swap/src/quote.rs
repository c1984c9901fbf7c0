use crate::{
    error::{RequestError, SwapError},
    request::SwapRequest,
    router,
    session::Session,
    units::Amount,
};
use alloy_primitives::{Address, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use std::sync::Arc;
use swapdesk_wallets::WalletProvider;

/// The router's answer for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteResult {
    pub amount_out: Amount,
}

/// Reads quotes from the router. Every call is a fresh `eth_call`.
#[derive(Clone, Debug)]
pub struct QuoteClient {
    wallet: Arc<dyn WalletProvider>,
    router: Address,
}

impl QuoteClient {
    pub fn new(wallet: Arc<dyn WalletProvider>, router: Address) -> Self {
        Self { wallet, router }
    }

    pub fn router(&self) -> Address {
        self.router
    }

    /// Asks the router how much `request.token_out` the input buys.
    ///
    /// The output is denominated in the decimals of the input amount.
    pub async fn quote(
        &self,
        session: &Session,
        request: &SwapRequest,
    ) -> Result<QuoteResult, SwapError> {
        let raw = self.amount_out(session, request).await.map_err(SwapError::quote)?;
        Ok(QuoteResult { amount_out: Amount::new(raw, request.amount_in.decimals()) })
    }

    pub(crate) async fn amount_out(
        &self,
        session: &Session,
        request: &SwapRequest,
    ) -> Result<U256, String> {
        let from = session.account.ok_or_else(|| RequestError::NotConnected.to_string())?;
        let tx = TransactionRequest::default()
            .from(from)
            .to(self.router)
            .input(TransactionInput::new(router::get_amount_out(request)));

        debug!(router = %self.router, ?request, "getAmountOut");
        let data = self.wallet.call(tx).await.map_err(|err| err.to_string())?;
        router::decode_amount_out(&data)
            .map_err(|err| format!("could not decode the router's quote: {err}"))
    }
}
