use clap::Parser;
use eyre::Result;
use swapdesk_config::Config;

/// CLI arguments for `swapdesk config`.
#[derive(Clone, Debug, Parser)]
pub struct ConfigArgs {
    /// Only check that the config is complete and valid.
    #[arg(long)]
    pub check: bool,
}

impl ConfigArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if self.check {
            config.router()?;
            config.rpc_url()?;
            println!("config is valid");
            return Ok(());
        }
        print!("{}", config.to_string_pretty()?);
        Ok(())
    }
}
