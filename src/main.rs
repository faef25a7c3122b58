//! Synonym gateway server
//!
//! Serves the synonym list over HTTP through the configured cache.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use synonym_gateway::Config;
use synonym_gateway::server::run_server;
use synonym_gateway::utils::logging::{LogFormat, init_logging};
use tracing::{debug, error};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "synonym-gateway", version, about)]
struct Args {
    /// YAML configuration file; environment variables override its values
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Run database migrations before serving
    #[arg(long)]
    migrate: bool,

    /// Insert demo synonyms into an empty table (implies --migrate)
    #[arg(long)]
    seed: bool,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_format) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let config = match Config::load(args.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_server(config, args.migrate, args.seed).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line bind errors readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
