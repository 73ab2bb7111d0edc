mod cli_model;
mod config;
mod log_level;

use anyhow::Context;
use clap::ArgMatches;
use stderrlog::Timestamp;

pub use config::{Config, FilePair};
use log_level::LogLevel;

pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model::cli_model().get_matches();
    init_log(&m)?;
    Config::from_matches(&m)
}

fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let level = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .expect("Missing default for loglevel");
    let ts = m
        .get_one::<Timestamp>("timestamp")
        .cloned()
        .unwrap_or(Timestamp::Off);
    let quiet = m.get_flag("quiet") || level.verbosity().is_none();

    stderrlog::new()
        .quiet(quiet)
        .verbosity(level.verbosity().unwrap_or(0))
        .timestamp(ts)
        .init()
        .with_context(|| "Could not initialize logger")
}
