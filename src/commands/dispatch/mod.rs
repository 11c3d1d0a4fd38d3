//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::{ConfigSource, WalkConfig};
use graphwalk_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let (config, source) = WalkConfig::discover(cli.config.as_deref())?;

    match &source {
        ConfigSource::File(path) => {
            debug!(path = %path.display(), elapsed = ?start.elapsed(), "load_config")
        }
        ConfigSource::Defaults => debug!(elapsed = ?start.elapsed(), "default_config"),
    }

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
