use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use flightmark::cli::args::{Cli, Commands};
use flightmark::cli::commands;
use flightmark::config::{ColorSetting, Config};
use flightmark::error::FlightmarkError;
use flightmark::logging::{init_logging, LoggingConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, FlightmarkError> {
    let loaded = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    match loaded {
        Ok(config) => Ok(config),
        // A broken file must not lock the user out of fixing it
        Err(FlightmarkError::Config(_)) if matches!(cli.command, Commands::Config(_)) => {
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn run() -> Result<(), FlightmarkError> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(LoggingConfig::from_verbosity(cli.verbose, &config.logging.level));

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Calc { times, tracking } => commands::calc(&times, &tracking, &config, format)?,
        Commands::Replay { file, tracking } => {
            commands::replay(&file, &tracking, &config, format)?
        }
        Commands::Mark {
            length,
            fps,
            tracking,
        } => commands::mark(length.as_deref(), fps, &tracking, &config, format)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
        Commands::Config(args) => {
            commands::config(args.command, &config, cli.config.as_deref(), format)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
