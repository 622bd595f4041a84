//! restyle - Restyle a profile form from natural-language prompts
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use restyle_app::config;
use restyle_core::prelude::*;

/// restyle - Restyle a profile form from natural-language prompts
#[derive(Parser, Debug)]
#[command(name = "restyle")]
#[command(about = "Restyle a profile form from natural-language prompts", long_about = None)]
struct Args {
    /// Settings file (defaults to .restyle/config.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default .restyle/config.toml and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (prompts on stdin, NDJSON events on stdout)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    restyle_core::logging::init()?;

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        config::init_config_dir(&base_dir).context("Failed to write default settings")?;
        eprintln!(
            "Wrote default settings to {}",
            config::config_path(&base_dir).display()
        );
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => config::load_settings_from(path),
        None => config::load_settings(&base_dir),
    };

    let result = if args.headless {
        restyle::run_headless(settings).await
    } else {
        restyle_tui::run(settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(path) = restyle_core::logging::get_current_log_file() {
            eprintln!("restyle failed: {e}. Logs: {}", path.display());
        }
    }

    info!("restyle exiting");
    result
}
