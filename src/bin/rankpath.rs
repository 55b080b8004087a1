// src/bin/rankpath.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use rankpath_core::cli::{self, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli::load_config(cli.config.as_deref())?;
    dispatch(&cli, &config)
}

fn dispatch(cli: &Cli, config: &rankpath_core::config::Config) -> Result<()> {
    match &cli.command {
        Commands::Rank(args) => cli::handle_rank(args, config),
        Commands::Path(args) => cli::handle_path(args, config, cli.verbose),
        Commands::Forest(args) => cli::handle_forest(args, config, cli.verbose),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
