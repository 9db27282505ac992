use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::models::FetchTarget;

fn resolve_target(cli: &Cli) -> FetchTarget {
    let (frontier_script, state_glob) = match &cli.command {
        Commands::Fetch {
            frontier_script,
            state_glob,
            ..
        } => (frontier_script.clone(), state_glob.clone()),
        _ => (
            cli::DEFAULT_FRONTIER_SCRIPT.to_string(),
            cli::DEFAULT_STATE_GLOB.to_string(),
        ),
    };
    FetchTarget {
        host: cli.host.clone(),
        data_root: PathBuf::from(&cli.data_root),
        frontier_script,
        state_glob,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "debug" } else { "warn" }),
    )
    .init();

    let target = resolve_target(&cli);
    commands::handle_commands(&cli, &target)
}
