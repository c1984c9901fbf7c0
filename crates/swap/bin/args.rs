use crate::cmd::{
    config::ConfigArgs, interactive::InteractiveArgs, quote::QuoteArgs, swap::SwapArgs,
};
use clap::{Parser, Subcommand};
use swapdesk::opts::ClientOpts;

/// Quote and execute swaps against an on-chain swap router.
#[derive(Parser)]
#[command(name = "swapdesk", version)]
pub struct Swapdesk {
    #[command(flatten)]
    pub opts: ClientOpts,

    #[command(subcommand)]
    pub cmd: SwapdeskSubcommand,
}

#[derive(Subcommand)]
pub enum SwapdeskSubcommand {
    /// Connect the wallet and show the account and its balance.
    #[command(visible_alias = "a")]
    Account,

    /// Calculate the exchange rate for an amount.
    #[command(visible_alias = "q")]
    Quote(QuoteArgs),

    /// Swap an amount, guarded by the configured slippage tolerance.
    #[command(visible_alias = "s")]
    Swap(SwapArgs),

    /// Edit the form and trigger actions from a prompt.
    #[command(visible_alias = "i")]
    Interactive(InteractiveArgs),

    /// Print the resolved configuration.
    Config(ConfigArgs),
}
