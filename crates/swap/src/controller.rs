//! The view state and the user actions that change it.
//!
//! Remote operations never hold the state lock. Each action takes a ticket when it starts and
//! applies its result only if no newer action of the same kind was started in the meantime.

use crate::{
    error::SwapError,
    quote::{QuoteClient, QuoteResult},
    request::{SwapForm, SwapRequest},
    session::{Session, WalletConnector},
    settings::SwapSettings,
    submit::{SwapReceipt, SwapSubmitter},
    units::Amount,
};
use alloy_primitives::Address;
use parking_lot::Mutex;
use std::sync::Arc;
use swapdesk_wallets::WalletProvider;

/// Where the current swap attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Quoting,
    Quoted,
    Submitting,
    Confirmed,
    Failed,
}

impl Phase {
    /// Whether a remote operation of the attempt is outstanding.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Quoting | Self::Submitting)
    }

    /// Whether the attempt is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed | Self::Failed)
    }
}

/// Everything the user sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub form: SwapForm,
    pub session: Session,
    /// The displayed quote and the request it was computed for.
    pub quote: Option<(SwapRequest, QuoteResult)>,
    pub error: Option<String>,
    pub phase: Phase,
    pub last_swap: Option<SwapReceipt>,
}

impl ViewState {
    pub fn exchange_rate(&self) -> Option<Amount> {
        self.quote.map(|(_, quote)| quote.amount_out)
    }
}

/// Latest ticket issued per field.
#[derive(Debug, Default)]
struct Tickets {
    quote: u64,
    swap: u64,
}

#[derive(Debug, Default)]
struct Shared {
    view: ViewState,
    tickets: Tickets,
    initialized: bool,
}

/// Owns the [`ViewState`] and runs the user actions against the wallet and the router.
///
/// Clones share the same state, so actions can be spawned as separate tasks.
#[derive(Clone, Debug)]
pub struct ViewStateController {
    shared: Arc<Mutex<Shared>>,
    connector: WalletConnector,
    quotes: QuoteClient,
    submitter: SwapSubmitter,
    decimals: u8,
}

impl ViewStateController {
    pub fn new(wallet: Arc<dyn WalletProvider>, settings: &SwapSettings) -> Self {
        let connector = WalletConnector::new(wallet.clone(), settings.sender);
        let quotes = QuoteClient::new(wallet.clone(), settings.router);
        let submitter = SwapSubmitter::new(
            wallet,
            quotes.clone(),
            settings.slippage,
            settings.confirmations,
            settings.timeout,
        );
        Self {
            shared: Default::default(),
            connector,
            quotes,
            submitter,
            decimals: settings.token_decimals,
        }
    }

    /// Connects the wallet. Only the first call does anything.
    pub async fn initialize(&self) {
        {
            let mut shared = self.shared.lock();
            if shared.initialized {
                return;
            }
            shared.initialized = true;
        }

        let result = self.connector.connect().await;
        let mut shared = self.shared.lock();
        match result {
            Ok(session) => {
                shared.view.session = session;
                shared.view.error = None;
            }
            Err(err) => {
                debug!(%err, "wallet connection failed");
                shared.view.error = Some(err.to_string());
            }
        }
    }

    pub fn set_token_in(&self, token: impl Into<String>) {
        let token = token.into();
        self.edit(|form| form.token_in = token);
    }

    pub fn set_token_out(&self, token: impl Into<String>) {
        let token = token.into();
        self.edit(|form| form.token_out = token);
    }

    pub fn set_amount(&self, amount: impl Into<String>) {
        let amount = amount.into();
        self.edit(|form| form.amount = amount);
    }

    fn edit(&self, f: impl FnOnce(&mut SwapForm)) {
        let mut shared = self.shared.lock();
        f(&mut shared.view.form);
        if shared.view.phase.is_terminal() {
            shared.view.phase = Phase::Idle;
        }
    }

    /// Quotes the form and displays the result as the exchange rate.
    pub async fn calculate_exchange_rate(&self) {
        let (ticket, session, form) = {
            let mut shared = self.shared.lock();
            shared.tickets.quote += 1;
            // an outstanding swap owns the phase until it settles
            if shared.view.phase != Phase::Submitting {
                shared.view.phase = Phase::Quoting;
            }
            (shared.tickets.quote, shared.view.session, shared.view.form.clone())
        };

        let result = async {
            let request = form.to_request(self.decimals).map_err(SwapError::quote)?;
            let quote = self.quotes.quote(&session, &request).await?;
            Ok::<_, SwapError>((request, quote))
        }
        .await;

        let mut shared = self.shared.lock();
        if shared.tickets.quote != ticket {
            debug!(ticket, latest = shared.tickets.quote, "discarding stale quote");
            return;
        }
        let quoting = shared.view.phase == Phase::Quoting;
        match result {
            Ok(quote) => {
                shared.view.quote = Some(quote);
                shared.view.error = None;
                if quoting {
                    shared.view.phase = Phase::Quoted;
                }
            }
            Err(err) => {
                shared.view.error = Some(err.to_string());
                if quoting {
                    shared.view.phase = Phase::Failed;
                }
            }
        }
    }

    /// Swaps the form's amount and waits for confirmation.
    ///
    /// The displayed quote is consumed; it serves as the slippage reference if it was computed
    /// for the same request. On success the form is reset, on failure it is kept.
    pub async fn swap(&self) {
        let (ticket, session, form, displayed) = {
            let mut shared = self.shared.lock();
            shared.tickets.swap += 1;
            // a quote still in flight belongs to the attempt being replaced
            shared.tickets.quote += 1;
            shared.view.phase = Phase::Submitting;
            let displayed = shared.view.quote.take();
            (shared.tickets.swap, shared.view.session, shared.view.form.clone(), displayed)
        };

        let result = async {
            let request = form.to_request(self.decimals).map_err(SwapError::swap)?;
            let reference = displayed
                .filter(|(quoted, _)| *quoted == request)
                .map(|(_, quote)| quote.amount_out.raw());
            self.submitter.submit(&session, &request, reference).await
        }
        .await;

        {
            let mut shared = self.shared.lock();
            if shared.tickets.swap != ticket {
                debug!(ticket, latest = shared.tickets.swap, "discarding stale swap result");
                return;
            }
            match result {
                Ok(receipt) => {
                    debug!(tx_hash = %receipt.tx_hash, "swap confirmed");
                    shared.view.form = SwapForm::default();
                    shared.view.quote = None;
                    shared.view.error = None;
                    shared.view.phase = Phase::Confirmed;
                    shared.view.last_swap = Some(receipt);
                }
                Err(err) => {
                    shared.view.error = Some(err.to_string());
                    shared.view.phase = Phase::Failed;
                    return;
                }
            }
        }

        self.refresh_balance().await;
    }

    /// Re-reads the balance of the connected account. Failures are only logged.
    pub async fn refresh_balance(&self) {
        let Some(account) = self.account() else { return };
        match self.connector.balance_of(account).await {
            Ok(balance) => {
                let mut shared = self.shared.lock();
                if shared.view.session.account == Some(account) {
                    shared.view.session.balance = balance;
                }
            }
            Err(err) => warn!(%account, %err, "failed to refresh balance"),
        }
    }

    pub fn account(&self) -> Option<Address> {
        self.shared.lock().view.session.account
    }

    /// The native balance, if an account is connected.
    pub fn balance(&self) -> Option<Amount> {
        self.shared.lock().view.session.balance()
    }

    pub fn exchange_rate(&self) -> Option<Amount> {
        self.shared.lock().view.exchange_rate()
    }

    pub fn error(&self) -> Option<String> {
        self.shared.lock().view.error.clone()
    }

    pub fn phase(&self) -> Phase {
        self.shared.lock().view.phase
    }

    pub fn form(&self) -> SwapForm {
        self.shared.lock().view.form.clone()
    }

    /// A snapshot of the whole view.
    pub fn view(&self) -> ViewState {
        self.shared.lock().view.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{U256, address};
    use swapdesk_wallets::{NoWallet, mock::MockWallet};

    const ALICE: Address = address!("0x000000000000000000000000000000000000abc0");
    const ROUTER: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    #[tokio::test]
    async fn initialize_runs_once() {
        let controller = ViewStateController::new(
            Arc::new(MockWallet::authorized(ALICE, U256::ZERO)),
            &SwapSettings::new(ROUTER),
        );
        controller.initialize().await;
        assert_eq!(controller.account(), Some(ALICE));

        controller.shared.lock().view.session = Session::default();
        controller.initialize().await;
        assert_eq!(controller.account(), None);
    }

    #[tokio::test]
    async fn edits_reset_terminal_phase() {
        let controller =
            ViewStateController::new(Arc::new(NoWallet::default()), &SwapSettings::new(ROUTER));
        controller.calculate_exchange_rate().await;
        assert_eq!(controller.phase(), Phase::Failed);
        assert!(controller.error().is_some());

        controller.set_amount("1.0");
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.form().amount, "1.0");
    }

    #[tokio::test]
    async fn swap_with_invalid_form_keeps_it() {
        let controller = ViewStateController::new(
            Arc::new(MockWallet::authorized(ALICE, U256::ZERO)),
            &SwapSettings::new(ROUTER),
        );
        controller.initialize().await;
        controller.set_token_in("T1");
        controller.swap().await;

        assert_eq!(controller.phase(), Phase::Failed);
        assert_eq!(controller.error().unwrap(), r#"invalid input token address "T1""#);
        assert_eq!(controller.form().token_in, "T1");
    }
}
