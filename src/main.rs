//! election-sim: interactive election simulator

use std::io;

use clap::Parser;

use election_sim::config::{Config, ResultsFormat};
use election_sim::shell::Shell;
use election_sim::{ElectionRegistry, Result};

/// Register voters and candidates, cast votes and view ranked results
#[derive(Parser, Debug)]
#[command(name = "election-sim", version)]
#[command(about = "In-memory election simulator with stack, queue and linked-list ballot logs")]
struct Args {
    /// Print results as a JSON summary instead of text
    #[arg(long)]
    json: bool,

    /// Log level for this crate (overrides LOG_LEVEL)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Disable logging and the startup banner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if args.json {
        config.shell.results_format = ResultsFormat::Json;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.quiet {
        config.logging.level = "off".to_string();
        config.shell.show_banner = false;
    }

    election_sim::init(&config.logging)?;

    let mut registry = ElectionRegistry::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut registry, stdin.lock(), stdout.lock(), config.shell).run()?;

    tracing::info!(total_ballots = registry.total_votes(), "session finished");
    Ok(())
}
