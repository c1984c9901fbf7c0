use crate::{NoWallet, RpcWallet, WalletProvider, utils};
use alloy_primitives::Address;
use clap::Parser;
use eyre::Result;
use std::sync::Arc;

/// The wallet options can either be:
/// 1. Private Key (cleartext in CLI or `SWAPDESK_PRIVATE_KEY`)
/// 2. Unlocked accounts of the connected node
///
/// Without either, no wallet is available and every wallet request fails.
#[derive(Clone, Debug, Default, Parser)]
#[command(next_help_heading = "Wallet options")]
pub struct WalletOpts {
    /// Use the provided private key.
    #[arg(
        long,
        value_name = "RAW_PRIVATE_KEY",
        env = "SWAPDESK_PRIVATE_KEY",
        hide_env_values = true
    )]
    pub private_key: Option<String>,

    /// Use the accounts unlocked on the node, sending through `eth_sendTransaction`.
    #[arg(long, conflicts_with = "private_key")]
    pub unlocked: bool,

    /// The account to use.
    ///
    /// With --unlocked this picks one of the node's accounts, with a private key it must match
    /// the signer.
    #[arg(long, short, env = "ETH_FROM", value_name = "ADDRESS")]
    pub from: Option<Address>,
}

impl WalletOpts {
    /// Builds the wallet these options describe, talking to `rpc_url`.
    pub async fn wallet(&self, rpc_url: &str) -> Result<Arc<dyn WalletProvider>> {
        if let Some(private_key) = &self.private_key {
            let signer = utils::create_private_key_signer(private_key)?;
            if let Some(from) = self.from
                && from != signer.address()
            {
                eyre::bail!(
                    "the sender {from} does not match the address of the provided private key ({})",
                    signer.address()
                )
            }
            return Ok(Arc::new(RpcWallet::with_signer(rpc_url, signer).await?));
        }

        if self.unlocked {
            return Ok(Arc::new(RpcWallet::unlocked(rpc_url, self.from).await?));
        }

        Ok(Arc::new(NoWallet::new(
            "no wallet available; pass --private-key or --unlocked to connect one",
        )))
    }
}
