use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::AppConfig;
use connect_four::error::GameError;
use connect_four::ui::App;

/// Play Connect Four against another person in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Disable coloured tokens
    #[arg(long)]
    no_color: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.no_color {
        config.display.color = false;
    }
    log::debug!("display config: {:?}", config.display);

    let app = App::new(config);
    match app.run(io::stdin().lock(), io::stdout()) {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed) => {
            log::info!("input closed, leaving the game");
            Ok(())
        }
        Err(err) => Err(err).context("running game"),
    }
}
