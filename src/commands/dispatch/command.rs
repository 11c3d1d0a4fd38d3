//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{leaves, path, traverse};
use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: WalkConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: WalkConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Resumable graph traversal and shortest paths.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Traverse {
                graph,
                strategy,
                source,
                max_visits,
            } => traverse::execute(
                ctx,
                &traverse::TraverseArgs {
                    graph,
                    strategy: *strategy,
                    sources: source,
                    max_visits: *max_visits,
                },
            ),
            Commands::Path {
                graph,
                from,
                to,
                algorithm,
            } => path::execute(ctx, graph, *from, *to, *algorithm),
            Commands::Leaves { graph } => leaves::execute(ctx, graph),
        }
    }
}
