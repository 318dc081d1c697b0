//! regionlab CLI - region sampling and interval propagation from the command line.

use clap::Parser;
use regionlab_cli::commands;
use regionlab_cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr); RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> regionlab_cli::Result<()> {
    let (config, formatter) = cli.resolve()?;

    match cli.command {
        Command::Region(args) => commands::execute_region(args, &config, &formatter),
        Command::Simulate(args) => commands::execute_simulate(args, &config, &formatter),
        Command::Solve(args) => commands::execute_solve(args, &config, &formatter),
        Command::Scene(args) => commands::execute_scene(args, &config, &formatter),
        Command::Grid(args) => commands::execute_grid(args, &config, &formatter),
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)
        }
    }
}
