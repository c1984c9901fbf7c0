#[macro_use]
extern crate tracing;

use clap::Parser;
use eyre::Result;
use swapdesk::{ViewStateController, handler, opts::ClientOpts, render::render, utils};
use swapdesk_config::Config;

mod args;
mod cmd;

use args::{Swapdesk, SwapdeskSubcommand};

fn main() -> Result<()> {
    handler::install();
    utils::load_dotenv();
    utils::subscriber();
    let args = Swapdesk::parse();
    run(args)
}

#[tokio::main]
async fn run(args: Swapdesk) -> Result<()> {
    let config = args.opts.load_config()?;
    trace!(?config, "loaded config");

    match args.cmd {
        SwapdeskSubcommand::Config(cmd) => cmd.run(&config),
        SwapdeskSubcommand::Interactive(cmd) => {
            let controller = connect(&args.opts, &config).await?;
            cmd.run(&controller).await
        }
        SwapdeskSubcommand::Account => show(&connect(&args.opts, &config).await?),
        SwapdeskSubcommand::Quote(cmd) => {
            let controller = connect(&args.opts, &config).await?;
            cmd.run(&controller).await;
            show(&controller)
        }
        SwapdeskSubcommand::Swap(cmd) => {
            let controller = connect(&args.opts, &config).await?;
            cmd.run(&controller).await;
            show(&controller)
        }
    }
}

async fn connect(opts: &ClientOpts, config: &Config) -> Result<ViewStateController> {
    let controller = opts.controller(config).await?;
    controller.initialize().await;
    Ok(controller)
}

/// Prints the view, exiting with an error code if it carries an error.
fn show(controller: &ViewStateController) -> Result<()> {
    println!("{}", render(&controller.view()));
    if controller.error().is_some() {
        std::process::exit(1);
    }
    Ok(())
}
