//! Tarkov Search - open tarkov.dev and wiki pages for Escape from Tarkov lookups

use clap::{CommandFactory, Parser};

mod browser;
mod cache;
mod cli;
mod config;
mod diagnostics;
mod error;
mod output;
mod search;
mod server;

use cli::{CacheCommands, Cli, Commands, GlobalOptions};
use error::{Error, Result};
use search::Category;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if matches!(err, Error::Validation(_)) {
            eprintln!();
            let _ = Cli::command().print_help();
        }
        std::process::exit(1);
    }
}

/// Filter used when `RUST_LOG` is unset; `--debug` only raises this crate
fn default_log_filter(debug: bool) -> &'static str {
    if debug { "warn,tarkov=debug" } else { "warn" }
}

/// `RUST_LOG` wins over the default filter
fn init_logging(debug: bool) {
    let default = default_log_filter(debug);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
    log::debug!("Debug logging enabled");
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Some(Commands::Quest { name }) => cli::search::run(&opts, &name, Some(Category::Quest)).await,
        Some(Commands::Ammo { name }) => cli::search::run(&opts, &name, Some(Category::Ammo)).await,
        Some(Commands::Key { name }) => cli::search::run(&opts, &name, Some(Category::Key)).await,
        Some(Commands::Boss { name }) => cli::search::run(&opts, &name, Some(Category::Boss)).await,
        Some(Commands::Cache(cache_cmd)) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::List => cli::cache::list(&opts),
            CacheCommands::Clear => cli::cache::clear(&opts),
            CacheCommands::Path => cli::cache::path(&opts),
        },
        Some(Commands::Completion { shell }) => {
            cli::completions::generate(shell);
            Ok(())
        }
        None if cli.web => cli::web::run(&opts, cli.host.as_deref(), cli.port).await,
        None if !cli.query.is_empty() => cli::search::run(&opts, &cli.query, None).await,
        None => Err(Error::missing_query()),
    }
}
