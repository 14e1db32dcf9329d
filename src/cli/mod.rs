//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod cache;
pub mod completions;
pub mod context;
pub mod search;
pub mod web;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Look up Escape from Tarkov items, quests, ammo, keys and bosses on
/// tarkov.dev and the wiki
#[derive(Parser, Debug)]
#[command(name = "tarkov")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    tarkov RIP                    # Item\n  \
    tarkov 5.45x39 BP             # Ammo (auto-detected)\n  \
    tarkov quest Debut            # Force a category\n  \
    tarkov --web                  # Local web interface")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Search query (item name, quest, ammo, key, or boss)
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Start the web interface
    #[arg(long, short = 'w')]
    pub web: bool,

    /// Web interface bind address
    #[arg(long, env = "TARKOV_HOST", hide_env = true)]
    pub host: Option<String>,

    /// Web interface port
    #[arg(long, short = 'p', env = "TARKOV_PORT", hide_env = true)]
    pub port: Option<u16>,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "TARKOV_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "TARKOV_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override cache file location
    #[arg(long, global = true, env = "TARKOV_CACHE_FILE", hide_env = true)]
    pub cache_file: Option<String>,

    /// Bypass the result cache
    #[arg(long, global = true, env = "TARKOV_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Print the URLs without opening a browser
    #[arg(long, short = 'n', global = true, env = "TARKOV_DRY_RUN", hide_env = true)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "TARKOV_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a quest
    Quest {
        /// Quest name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Search for ammunition
    Ammo {
        /// Ammunition name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Search for a key
    Key {
        /// Key name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Search for a boss
    Boss {
        /// Boss name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Manage the local result cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
  bash:   tarkov completion bash > /etc/bash_completion.d/tarkov
  zsh:    tarkov completion zsh > \"${fpath[1]}/_tarkov\"
  fish:   tarkov completion fish > ~/.config/fish/completions/tarkov.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,

    /// List cached searches
    #[command(visible_alias = "ls")]
    List,

    /// Remove all cached searches
    Clear,

    /// Print the cache file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_free_text_query() {
        let cli = Cli::try_parse_from(["tarkov", "Dorm", "room", "314"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.query, vec!["Dorm", "room", "314"]);
    }

    #[test]
    fn test_subcommand_word_later_in_query_stays_positional() {
        let cli = Cli::try_parse_from(["tarkov", "Marked", "key"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.query, vec!["Marked", "key"]);
    }

    #[test]
    fn test_category_subcommand() {
        let cli = Cli::try_parse_from(["tarkov", "quest", "Shootout", "Picnic"]).unwrap();
        match cli.command {
            Some(Commands::Quest { name }) => assert_eq!(name, vec!["Shootout", "Picnic"]),
            other => panic!("Expected quest subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_category_subcommand_requires_name() {
        assert!(Cli::try_parse_from(["tarkov", "boss"]).is_err());
    }

    #[test]
    fn test_web_flag_with_port() {
        let cli = Cli::try_parse_from(["tarkov", "--web", "--port", "8080"]).unwrap();
        assert!(cli.web);
        assert_eq!(cli.port, Some(8080));
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["tarkov", "cache", "list", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Some(Commands::Cache(CacheCommands::List))
        ));
    }
}
