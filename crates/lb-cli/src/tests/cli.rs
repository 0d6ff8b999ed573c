use crate::Cli;

use std::path::PathBuf;

use clap::Parser;
use googletest::prelude::*;
use log::LevelFilter;

#[test]
fn given_no_arguments_when_parse_then_all_overrides_absent() {
    let cli = Cli::try_parse_from(["lockbox"]).unwrap();

    assert_that!(cli.config_dir, none());
    assert_that!(cli.log_level.is_none(), is_true());
}

#[test]
fn given_config_dir_and_level_when_parse_then_both_set() {
    let cli = Cli::try_parse_from([
        "lockbox",
        "--config-dir",
        "/tmp/lockbox",
        "--log-level",
        "DEBUG",
    ])
    .unwrap();

    assert_that!(cli.config_dir, some(eq(&PathBuf::from("/tmp/lockbox"))));
    assert_that!(cli.log_level.map(|l| l.0), some(eq(LevelFilter::Debug)));
}

#[test]
fn given_unknown_flag_when_parse_then_error() {
    let result = Cli::try_parse_from(["lockbox", "--user", "bob"]);

    assert_that!(result.is_err(), is_true());
}

#[test]
fn given_misspelled_log_level_when_parse_then_rejected() {
    let result = Cli::try_parse_from(["lockbox", "--log-level", "bogus"]);

    assert_that!(result.is_err(), is_true());
}
