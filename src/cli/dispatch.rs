//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::exit::SpeclinkExit;
use anyhow::{Context, Result};

/// Executes the parsed command.
///
/// # Errors
/// Returns error if configuration loading or the command handler fails.
pub fn execute(cli: Cli) -> Result<SpeclinkExit> {
    let Some(command) = cli.command else {
        return Ok(SpeclinkExit::Success);
    };

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.verbose = cli.verbose;

    match command {
        Commands::Extract {
            dir,
            output,
            matching,
        } => {
            handlers::apply_matching(&mut config, &matching);
            handlers::handle_extract(&config, &dir, output.as_deref())
        }
        Commands::Relink {
            graph,
            output,
            matching,
        } => {
            handlers::apply_matching(&mut config, &matching);
            handlers::handle_relink(&config, &graph, output.as_deref())
        }
        Commands::Score {
            graph,
            output,
            scoring,
        } => {
            handlers::apply_scoring(&mut config, &scoring);
            handlers::handle_score(&config, &graph, &output)
        }
        Commands::Run {
            dir,
            output,
            matching,
            scoring,
        } => {
            handlers::apply_matching(&mut config, &matching);
            handlers::apply_scoring(&mut config, &scoring);
            handlers::handle_run(&config, &dir, &output)
        }
        Commands::Truth {
            graph,
            query,
            scoring,
        } => {
            handlers::apply_scoring(&mut config, &scoring);
            handlers::handle_truth(&config, &graph, &query)
        }
    }
}
