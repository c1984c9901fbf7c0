use super::FormArgs;
use clap::Parser;
use swapdesk::ViewStateController;

/// CLI arguments for `swapdesk swap`.
#[derive(Clone, Debug, Parser)]
pub struct SwapArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Quote first and use that quote as the slippage reference.
    #[arg(long)]
    pub quote_first: bool,
}

impl SwapArgs {
    pub async fn run(self, controller: &ViewStateController) {
        self.form.fill(controller);
        if self.quote_first {
            controller.calculate_exchange_rate().await;
            if controller.error().is_some() {
                return;
            }
        }
        controller.swap().await;
    }
}
