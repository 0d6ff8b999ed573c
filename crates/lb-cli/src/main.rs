//! lockbox - local identity setup
//!
//! Resolves the local identity on startup: reuses the cached record when its
//! backend table still exists, otherwise walks the user through creating a
//! new user or binding to an existing one.
//!
//! # Examples
//!
//! ```bash
//! # Use ./config for config.toml, the identity record and the database
//! lockbox
//!
//! # Alternate config directory with verbose logging
//! lockbox --config-dir ~/.lockbox --log-level debug
//! ```

use lb_cli::{Cli, ConsolePrompter, Result as CliResult, logger};

use lb_config::Config;
use lb_db::SqliteTableProbe;
use lb_identity::{BootstrapOutcome, IdentityBootstrapper, LocalRecordStore};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(BootstrapOutcome::Ready(record)) => {
            println!("Welcome, {} ({})", record.name, record.username);
            ExitCode::SUCCESS
        }
        Ok(BootstrapOutcome::Quit) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.recovery_hint() {
                eprintln!();
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<BootstrapOutcome> {
    // Load and validate configuration
    let mut config = match cli.config_dir {
        Some(dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, config.log_file_path())?;

    info!("Starting lockbox v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = LocalRecordStore::new(config.dir());
    let probe = SqliteTableProbe::new(
        config.database_path(),
        Duration::from_secs(config.database.busy_timeout_secs),
    );

    let mut bootstrapper = IdentityBootstrapper::new(store, probe, ConsolePrompter::stdio());
    Ok(bootstrapper.run().await?)
}
