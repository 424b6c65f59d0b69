use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use hnfeed::{
    infrastructure::{
        api::HackerNewsClient, cli::Cli, config::Config, tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(items_per_page) = args.items_per_page.filter(|n| *n > 0) {
        config.feed.items_per_page = items_per_page;
    }
    log::info!(
        "Starting {} {} against {}",
        env!("CARGO_PKG_NAME"),
        hnfeed::VERSION,
        config.api.base_url
    );

    let source = Arc::new(HackerNewsClient::new(&config.api)?);
    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);

    let mut runner = AppRunner::new(config, source, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
