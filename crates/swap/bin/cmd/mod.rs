//! Subcommands of the `swapdesk` binary.

pub mod config;
pub mod interactive;
pub mod quote;
pub mod swap;

use clap::Parser;
use swapdesk::ViewStateController;

/// The form fields given on the command line.
#[derive(Clone, Debug, Parser)]
pub struct FormArgs {
    /// The token to sell.
    #[arg(value_name = "TOKEN_IN")]
    pub token_in: String,

    /// The token to buy.
    #[arg(value_name = "TOKEN_OUT")]
    pub token_out: String,

    /// The amount to sell, in whole tokens.
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: String,
}

impl FormArgs {
    pub fn fill(&self, controller: &ViewStateController) {
        controller.set_token_in(&self.token_in);
        controller.set_token_out(&self.token_out);
        controller.set_amount(&self.amount);
    }
}
