mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR_ENV: &str = "LOCKBOX_CONFIG_DIR";

const DEFAULT_CONFIG_DIRECTORY: &str = "config";
const DEFAULT_DATABASE_FILENAME: &str = "lockbox.db";
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
