use lb_config::LogLevel;

use std::path::PathBuf;

use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Parser, Debug)]
#[command(name = "lockbox")]
#[command(about = "Set up or restore the local lockbox identity")]
#[command(version)]
pub struct Cli {
    /// Config directory holding config.toml and the identity record
    /// (default: $LOCKBOX_CONFIG_DIR, else ./config)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Log level override: off, error, warn, info, debug, trace
    #[arg(
        long,
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LOG_LEVELS)
            .map(|level| LogLevel::parse_lenient(&level)),
    )]
    pub log_level: Option<LogLevel>,
}
