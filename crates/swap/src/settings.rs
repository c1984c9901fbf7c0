use crate::slippage::Slippage;
use alloy_primitives::Address;
use std::time::Duration;
use swapdesk_config::{Config, ConfigError};

/// What the controller needs to know about the router and the swaps it sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapSettings {
    pub router: Address,
    pub token_decimals: u8,
    pub slippage: Slippage,
    pub confirmations: u64,
    pub timeout: Duration,
    /// The account to use among the authorized ones.
    pub sender: Option<Address>,
}

impl SwapSettings {
    /// Settings for `router` with the default values of [`Config`].
    pub fn new(router: Address) -> Self {
        let config = Config::default();
        Self {
            router,
            token_decimals: config.token_decimals,
            slippage: Slippage::default(),
            confirmations: config.confirmations,
            timeout: config.confirmation_timeout(),
            sender: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            router: config.router()?,
            token_decimals: config.token_decimals,
            slippage: Slippage::from_bps(config.slippage_bps)
                .ok_or(ConfigError::InvalidSlippage(config.slippage_bps))?,
            confirmations: config.confirmations,
            timeout: config.confirmation_timeout(),
            sender: config.sender,
        })
    }
}
