mod app;
mod cli;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use toolbelt::config::Config;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        logging::init(logging::LogTarget::Stderr)?;
        let config = Config::load();
        return cli::run(command, &config);
    }

    logging::init(logging::LogTarget::File)?;
    let config = Config::load();
    let mut app = app::App::new(&config);
    let mut terminal = tui::init()?;
    tracing::info!("Started TUI");
    let result = event::run(&mut app, &mut terminal, config.tick_rate());

    tui::restore()?;
    tracing::info!("Stopped TUI");

    result
}
