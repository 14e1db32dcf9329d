//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.tarkov-search/config.yaml)
    pub config: Option<String>,

    /// Custom cache file path
    pub cache_file: Option<String>,

    /// Neither read nor write the cache
    pub no_cache: bool,

    /// Resolve URLs without launching a browser
    pub dry_run: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            cache_file: cli.cache_file.clone(),
            no_cache: cli.no_cache,
            dry_run: cli.dry_run,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get cache file override as `Option<&str>`.
    pub fn cache_file_ref(&self) -> Option<&str> {
        self.cache_file.as_deref()
    }
}
