// crates/agriverse-cli/src/main.rs
//
// CLI entrypoint for the Agriverse calculators.
//
// Loads configuration, initializes tracing, and dispatches to the carbon
// footprint and staking reward subcommands.

mod commands;
mod config;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::carbon::CarbonCmd;
use commands::stake::StakeCmd;
use commands::Context;
use config::{expand_tilde, CliConfig, DEFAULT_CONFIG_PATH};
use output::{format_error, OutputFormat};

/// Agriverse CLI — carbon offset and staking reward projections.
#[derive(Parser, Debug)]
#[command(
    name = "agriverse",
    version = "0.1.0",
    about = "Agriverse calculators: carbon footprint offsets and AV staking rewards"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Output format; overrides the config file.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Estimate a yearly CO2 footprint and the Tree NFT offset covering it.
    Carbon(CarbonCmd),

    /// Staking reward projections: estimate, tiers.
    #[command(subcommand)]
    Stake(StakeCmd),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = expand_tilde(&cli.config);
    let loaded = if config_path.exists() {
        Some(CliConfig::load(&config_path))
    } else {
        None
    };
    let config = match &loaded {
        Some(Ok(cfg)) => cfg.clone(),
        _ => CliConfig::default(),
    };

    // Initialize tracing subscriber for structured logging. Logs go to
    // stderr so JSON output on stdout stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match loaded {
        Some(Ok(_)) => tracing::debug!("Loaded configuration from {}", config_path.display()),
        Some(Err(e)) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path.display(),
            e
        ),
        None => tracing::debug!(
            "No config file at {}; using defaults",
            config_path.display()
        ),
    }

    let ctx = Context {
        output: cli.output.unwrap_or(config.output),
        renewable_policy: config.renewable_policy,
    };

    let result = match &cli.command {
        Commands::Carbon(cmd) => commands::carbon::run(cmd, &ctx),
        Commands::Stake(cmd) => commands::stake::run(cmd, &ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // JSON reports go to stdout with the rest of the machine-readable output.
            match ctx.output {
                OutputFormat::Json => println!("{}", format_error(e.as_ref(), ctx.output)),
                OutputFormat::Table => eprintln!("{}", format_error(e.as_ref(), ctx.output)),
            }
            ExitCode::FAILURE
        }
    }
}
