use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tdc_cli::commands::{intervals, report, util};
use tdc_cli::{Cli, Commands, Config, ConfigOverrides};

/// Load config with command-line overrides layered on top.
fn load_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let config =
        Config::load_with(config_path, overrides).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let stdout = io::stdout();
    match &cli.command {
        Some(Commands::Report(args)) => {
            let config = load_config(cli.config.as_deref(), &args.overrides())?;
            let as_of = util::resolve_as_of(args.history.as_of);
            let highlight = stdout.is_terminal();
            report::run(
                &mut stdout.lock(),
                &config,
                as_of,
                args.history.json,
                highlight,
            )?;
        }
        Some(Commands::Intervals(args)) => {
            let config = load_config(cli.config.as_deref(), &args.overrides())?;
            let as_of = util::resolve_as_of(args.history.as_of);
            intervals::run(&mut stdout.lock(), &config, as_of, args.history.json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
