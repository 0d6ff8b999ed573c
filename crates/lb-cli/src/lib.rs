//! lb-cli library
//!
//! Console front end for the identity bootstrap: argument parsing, logging
//! setup and the terminal prompter.

pub mod cli;
pub mod console_prompter;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use console_prompter::ConsolePrompter;
pub use error::{CliError, Result};
