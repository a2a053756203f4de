use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use nexus::cli::handlers::{
    CommandContext, SuggestParams, handle_board, handle_dates, handle_init, handle_list,
    handle_suggest, handle_tui,
};
use nexus::cli::{Cli, Commands};
use nexus::config::NexusConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it only ever logs to a file.
    let is_tui = matches!(cli.command, Commands::Tui);
    let log_file = cli
        .log_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| is_tui.then(nexus::logging::default_log_file).flatten());
    nexus::logging::init(cli.verbose, log_file, !is_tui);

    let config_path = cli.config.as_deref();
    let seed = cli.seed.as_deref();

    match cli.command {
        Commands::Init { force } => handle_init(force),
        Commands::List { filter, json } => {
            handle_list(&build_context(config_path, seed)?, filter, json)
        }
        Commands::Board { filter, json } => {
            handle_board(&build_context(config_path, seed)?, filter, json)
        }
        Commands::Dates { json } => handle_dates(&build_context(config_path, seed)?, json),
        Commands::Suggest {
            context,
            accept,
            accept_all,
            json,
        } => handle_suggest(
            build_context(config_path, seed)?,
            SuggestParams {
                context,
                accept,
                accept_all,
                json,
            },
        ),
        Commands::Tui => handle_tui(build_context(config_path, seed)?),
    }
}

fn build_context(config_path: Option<&str>, seed: Option<&str>) -> Result<CommandContext> {
    let (config, root) = load_config(config_path)?;
    CommandContext::new(config, &root, seed.map(Path::new)).context("Failed to load roadmap items")
}

fn load_config(explicit: Option<&str>) -> Result<(NexusConfig, PathBuf)> {
    match explicit {
        Some(path) => {
            let path = Path::new(path);
            let config = NexusConfig::load_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok((config, root))
        }
        None => {
            let cwd = std::env::current_dir()?;
            NexusConfig::discover(&cwd).context("Failed to load nexus configuration")
        }
    }
}
