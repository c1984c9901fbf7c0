use super::FormArgs;
use clap::Parser;
use swapdesk::ViewStateController;

/// CLI arguments for `swapdesk quote`.
#[derive(Clone, Debug, Parser)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

impl QuoteArgs {
    pub async fn run(self, controller: &ViewStateController) {
        self.form.fill(controller);
        controller.calculate_exchange_rate().await;
    }
}
