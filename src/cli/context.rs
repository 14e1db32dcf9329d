//! Command execution context
//!
//! Resolves configuration once per invocation and hands out the pieces a
//! command needs: the cache location, a browser launcher and the open delay.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::browser::{BrowserLauncher, DryRunBrowser, SystemBrowser};
use crate::cache::CacheStore;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
    opts: GlobalOptions,
}

impl CommandContext {
    /// Load config (explicit path or default location) and capture options.
    ///
    /// # Errors
    /// Returns error if an explicit config file is missing or the config
    /// cannot be parsed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        Ok(Self {
            config,
            format: opts.format,
            opts: opts.clone(),
        })
    }

    /// Cache file location: `--cache-file` > config `cache_file` > default
    pub fn cache_path(&self) -> Result<PathBuf> {
        if let Some(path) = self.opts.cache_file_ref() {
            return Ok(PathBuf::from(path));
        }
        if let Some(ref path) = self.config.cache_file {
            return Ok(path.clone());
        }
        Ok(CacheStore::default_path()?)
    }

    /// Cache file for searches; `None` when `--no-cache` is set
    pub fn search_cache_path(&self) -> Result<Option<PathBuf>> {
        if self.opts.no_cache {
            return Ok(None);
        }
        self.cache_path().map(Some)
    }

    /// Open the cache for a search, honouring `--no-cache`
    pub fn search_cache(&self, sink: Arc<dyn DiagnosticSink>) -> Result<CacheStore> {
        Ok(match self.search_cache_path()? {
            Some(path) => CacheStore::load(path, sink),
            None => CacheStore::disabled(sink),
        })
    }

    /// Browser launcher: dry-run, configured command, or platform opener
    pub fn browser(&self) -> Result<Arc<dyn BrowserLauncher>> {
        if self.opts.dry_run {
            return Ok(Arc::new(DryRunBrowser));
        }
        let browser = SystemBrowser::new(self.config.browser.command.as_deref())?;
        Ok(Arc::new(browser))
    }

    /// Pause between the two launches; zero in dry-run mode
    pub fn open_delay(&self) -> Duration {
        if self.opts.dry_run {
            Duration::ZERO
        } else {
            self.config.browser.open_delay()
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.opts.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> String {
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_cache_flag_beats_config() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "cache_file: /from/config.json\n");
        let opts = GlobalOptions {
            config: Some(config),
            cache_file: Some("/from/flag.json".to_string()),
            ..Default::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.cache_path().unwrap(), PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_config_cache_file_used_without_flag() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "cache_file: /from/config.json\n");
        let opts = GlobalOptions {
            config: Some(config),
            ..Default::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(
            ctx.cache_path().unwrap(),
            PathBuf::from("/from/config.json")
        );
    }

    #[test]
    fn test_no_cache_disables_search_cache() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "{}\n");
        let opts = GlobalOptions {
            config: Some(config),
            cache_file: Some("/from/flag.json".to_string()),
            no_cache: true,
            ..Default::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.search_cache_path().unwrap(), None);
        // Cache management still resolves the file
        assert!(ctx.cache_path().is_ok());
    }

    #[test]
    fn test_dry_run_has_no_delay() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir, "browser:\n  open_delay_ms: 900\n");
        let mut opts = GlobalOptions {
            config: Some(config),
            ..Default::default()
        };

        assert_eq!(
            CommandContext::new(&opts).unwrap().open_delay(),
            Duration::from_millis(900)
        );

        opts.dry_run = true;
        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.open_delay(), Duration::ZERO);
        assert!(ctx.is_dry_run());
    }
}
