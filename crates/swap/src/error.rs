/// A failed user action, reduced to the message shown to the user.
///
/// The message is displayed verbatim, so a revert reason reaches the view exactly as the router
/// produced it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    /// No wallet, an unreachable wallet, or no authorized account.
    #[error("{0}")]
    WalletUnavailable(String),
    /// The quote could not be read.
    #[error("{0}")]
    QuoteUnavailable(String),
    /// The swap was not executed.
    #[error("{0}")]
    SwapFailed(String),
}

impl SwapError {
    pub fn wallet(err: impl ToString) -> Self {
        Self::WalletUnavailable(err.to_string())
    }

    pub fn quote(err: impl ToString) -> Self {
        Self::QuoteUnavailable(err.to_string())
    }

    pub fn swap(err: impl ToString) -> Self {
        Self::SwapFailed(err.to_string())
    }

    /// The free-text message stored in the view.
    pub fn message(&self) -> &str {
        match self {
            Self::WalletUnavailable(msg) | Self::QuoteUnavailable(msg) | Self::SwapFailed(msg) => msg,
        }
    }
}

/// The form does not describe a valid swap.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("invalid {field} token address {value:?}")]
    InvalidToken { field: &'static str, value: String },
    #[error("amount is empty")]
    EmptyAmount,
    #[error("amount cannot be negative: {0}")]
    NegativeAmount(String),
    #[error("invalid amount {value:?}: {reason}")]
    InvalidAmount { value: String, reason: String },
    #[error("no connected account")]
    NotConnected,
}
