use clap::{CommandFactory, Parser};
use colored::Colorize;
use speclink_core::cli::{self, Cli};
use speclink_core::exit::SpeclinkExit;

fn main() -> SpeclinkExit {
    let cli = Cli::parse();

    if cli.command.is_none() {
        let _ = Cli::command().print_help();
        return SpeclinkExit::Success;
    }

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            SpeclinkExit::for_error(&e)
        }
    }
}
