use crate::{controller::ViewStateController, settings::SwapSettings};
use alloy_primitives::Address;
use clap::Parser;
use eyre::Result;
use swapdesk_config::{
    Config, ExtractConfigError,
    figment::{
        self, Metadata, Profile,
        value::{Dict, Map},
    },
};
use swapdesk_wallets::WalletOpts;

/// Options overriding the configured router and swap parameters.
#[derive(Clone, Debug, Default, Parser)]
#[command(next_help_heading = "Swap options")]
pub struct SwapOpts {
    /// The RPC endpoint.
    #[arg(short, long, env = "ETH_RPC_URL", value_name = "URL")]
    pub rpc_url: Option<String>,

    /// The address of the swap router.
    #[arg(long, value_name = "ADDRESS")]
    pub router: Option<Address>,

    /// Tolerated drop from the displayed quote, in basis points.
    #[arg(long, value_name = "BPS")]
    pub slippage_bps: Option<u16>,

    /// Decimals of the traded token amounts.
    #[arg(long, value_name = "DECIMALS")]
    pub decimals: Option<u8>,

    /// Seconds to wait for a swap to be confirmed.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Confirmations a swap needs.
    #[arg(long, value_name = "N")]
    pub confirmations: Option<u64>,
}

impl SwapOpts {
    pub fn dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(url) = self.rpc_url.as_deref().filter(|url| !url.trim().is_empty()) {
            dict.insert("eth_rpc_url".into(), url.into());
        }
        if let Some(router) = self.router {
            dict.insert("swap_router".into(), router.to_string().into());
        }
        if let Some(bps) = self.slippage_bps {
            dict.insert("slippage_bps".into(), bps.into());
        }
        if let Some(decimals) = self.decimals {
            dict.insert("token_decimals".into(), decimals.into());
        }
        if let Some(timeout) = self.timeout {
            dict.insert("transaction_timeout".into(), timeout.into());
        }
        if let Some(confirmations) = self.confirmations {
            dict.insert("confirmations".into(), confirmations.into());
        }
        dict
    }
}

/// The global options of the `swapdesk` binary.
#[derive(Clone, Debug, Default, Parser)]
pub struct ClientOpts {
    #[command(flatten)]
    pub swap: SwapOpts,

    #[command(flatten)]
    pub wallet: WalletOpts,
}

impl figment::Provider for ClientOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("ClientOpts")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let mut dict = self.swap.dict();
        if let Some(from) = self.wallet.from {
            dict.insert("sender".into(), from.to_string().into());
        }
        // merged after the env provider, which is global as well
        Ok(Map::from([(Profile::Global, dict)]))
    }
}

impl ClientOpts {
    /// Loads the config with these options merged on top.
    pub fn load_config(&self) -> Result<Config, ExtractConfigError> {
        Config::try_from(Config::figment().merge(self.clone()))
    }

    /// Builds the wallet and a controller for `config`. The wallet is not connected yet.
    pub async fn controller(&self, config: &Config) -> Result<ViewStateController> {
        let settings = SwapSettings::from_config(config)?;
        let wallet = self.wallet.wallet(config.rpc_url()?).await?;
        Ok(ViewStateController::new(wallet, &settings))
    }
}
