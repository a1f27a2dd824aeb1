//! tenant-webhooks - tenant-scoped webhook subscription service

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tenant_webhooks::utils::logging::init_tracing;
use tenant_webhooks::{Config, Result, Service, storage};
use tracing::info;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "tenant-webhooks", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "APP_CONFIG", default_value = "config/app.yaml")]
    config: PathBuf,

    /// Apply pending database migrations and exit
    #[arg(long)]
    migrate_only: bool,
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_file(&args.config).await?.apply_env()?;
    init_tracing(config.logging())?;
    info!(config = ?args.config, "Configuration loaded");

    if args.migrate_only {
        let database = storage::SeaOrmRepository::new(&config.storage().database).await?;
        database.migrate().await?;
        info!("Migrations applied");
        return Ok(());
    }

    Service::new(config).await?.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
