use anyhow::Context;
use clap::Parser;

use counter_demo::args::Cli;
use counter_demo::config::Config;
use counter_demo::counter::CounterComponents;
use counter_demo::{headless, logging, ui};

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let _enter = runtime.enter();

    let components = CounterComponents::from_config(&config);

    if let Some(actions) = &cli.headless {
        let report = runtime.block_on(headless::run(
            &components.view_model,
            &components.remote,
            actions,
        ))?;
        println!("{report}");
        return Ok(());
    }

    ui::run(components.view_model, config.ui.tick_rate())?;
    Ok(())
}
