use anyhow::Result;
use colored::Colorize;

use series_heatmap::cli::Command;
use series_heatmap::{handle_completions, handle_ingest, handle_process, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Ingest {
            shows,
            num_shows,
            tier,
        } => handle_ingest(tier.to_tier(), *num_shows, shows),
        Command::Process => handle_process(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
