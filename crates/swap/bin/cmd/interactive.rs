use clap::Parser;
use dialoguer::{Input, Select};
use eyre::Result;
use swapdesk::{ViewStateController, render::render};

/// CLI arguments for `swapdesk interactive`.
#[derive(Clone, Debug, Default, Parser)]
pub struct InteractiveArgs {
    /// Initial input token.
    #[arg(long, value_name = "TOKEN")]
    pub token_in: Option<String>,

    /// Initial output token.
    #[arg(long, value_name = "TOKEN")]
    pub token_out: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    TokenIn,
    TokenOut,
    Amount,
    Quote,
    Swap,
    Refresh,
    Quit,
}

impl Action {
    const ALL: [Self; 7] = [
        Self::TokenIn,
        Self::TokenOut,
        Self::Amount,
        Self::Quote,
        Self::Swap,
        Self::Refresh,
        Self::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::TokenIn => "Edit token 1",
            Self::TokenOut => "Edit token 2",
            Self::Amount => "Edit amount",
            Self::Quote => "Calculate exchange rate",
            Self::Swap => "Swap",
            Self::Refresh => "Refresh balance",
            Self::Quit => "Quit",
        }
    }
}

impl InteractiveArgs {
    pub async fn run(self, controller: &ViewStateController) -> Result<()> {
        if let Some(token) = self.token_in {
            controller.set_token_in(token);
        }
        if let Some(token) = self.token_out {
            controller.set_token_out(token);
        }

        let labels = Action::ALL.map(Action::label);
        loop {
            println!("\n{}\n", render(&controller.view()));

            let selected = blocking(move || {
                Select::new().with_prompt("Action").items(&labels).default(3).interact_opt()
            })
            .await?;
            let Some(action) = selected.map(|index| Action::ALL[index]) else { break };

            let form = controller.form();
            match action {
                Action::TokenIn => controller.set_token_in(edit("Token 1", form.token_in).await?),
                Action::TokenOut => {
                    controller.set_token_out(edit("Token 2", form.token_out).await?)
                }
                Action::Amount => controller.set_amount(edit("Amount", form.amount).await?),
                Action::Quote => controller.calculate_exchange_rate().await,
                Action::Swap => controller.swap().await,
                Action::Refresh => controller.refresh_balance().await,
                Action::Quit => break,
            }
        }
        Ok(())
    }
}

async fn edit(prompt: &'static str, current: String) -> Result<String> {
    blocking(move || {
        Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
    })
    .await
}

/// Runs a terminal prompt off the async workers.
async fn blocking<T: Send + 'static>(
    prompt: impl FnOnce() -> dialoguer::Result<T> + Send + 'static,
) -> Result<T> {
    Ok(tokio::task::spawn_blocking(prompt).await??)
}
