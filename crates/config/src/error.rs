//! Config extraction and validation errors.

use figment::providers::{Format, Toml};
use std::{collections::HashSet, error::Error, fmt};

/// Represents a failed attempt to extract `Config` from a `Figment`
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    /// error thrown when extracting the `Config`
    pub(crate) error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut unique = HashSet::with_capacity(self.error.count());
        writeln!(f, "failed to extract swapdesk config:")?;
        for err in self.error.clone() {
            let from_toml = err
                .metadata
                .as_ref()
                .map(|meta| meta.name.contains(Toml::NAME))
                .unwrap_or_default();
            let mut line = if from_toml {
                format!("{} error: {err}", crate::Config::FILE_NAME)
            } else {
                format!("swapdesk config error: {err}")
            };
            if !err.path.is_empty() {
                // the path will contain the setting value like `["swap_router"]`
                line.push_str(&format!(" for setting `{}`", err.path.join(".")));
            }
            if unique.insert(line.clone()) {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}

/// A config value that extracted fine but cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no swap router configured; set `swap_router` in swapdesk.toml, SWAPDESK_SWAP_ROUTER or --router")]
    MissingRouter,
    #[error("no RPC endpoint configured; set `eth_rpc_url` or --rpc-url")]
    MissingRpcUrl,
    #[error("slippage of {0} bps exceeds 100% (10000 bps)")]
    InvalidSlippage(u16),
    #[error("{0} decimals do not fit a uint256 amount (max 77)")]
    InvalidDecimals(u8),
}
