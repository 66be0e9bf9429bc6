//! OfstedReady command-line entry point

use anyhow::{Context, Result};
use clap::Parser;
use ofstedready_core::config::{ConfigManager, load_dotenv};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::*;

const DEFAULT_LOG_FILTER: &str = "ofstedready=info,ofstedready_core=info";
const VERBOSE_LOG_FILTER: &str = "ofstedready=debug,ofstedready_core=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    // Load environment variables from .env file
    load_dotenv();

    let workspace = match &args.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let mut manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)
            .context("Failed to load configuration")?,
    };
    if let Some(model) = &args.model {
        manager.config_mut().api.model = model.clone();
    }

    match &args.command {
        Commands::Generate(generate_args) => {
            handle_generate_command(manager.config(), &workspace, generate_args).await
        }
        Commands::Prompt(request_args) => handle_prompt_command(manager.config(), request_args),
        Commands::List { json } => handle_list_command(*json),
        Commands::Init { force } => handle_init_command(&workspace, *force),
        Commands::Config => handle_config_command(&manager),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
