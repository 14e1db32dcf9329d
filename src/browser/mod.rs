//! Handing URLs to the user's browser

use async_trait::async_trait;

use crate::error::BrowserError;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::RecordingBrowser;

/// Something that can show a URL to the user
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Open `url`, resolving once the opener has handed it off
    async fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Launches URLs with the platform opener or a configured command
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    program: String,
    args: Vec<String>,
}

impl SystemBrowser {
    /// Use the given command line, or the platform default when `None`.
    ///
    /// The URL is appended as the final argument.
    pub fn new(command: Option<&str>) -> Result<Self, BrowserError> {
        match command {
            Some(cmd) => {
                let mut parts = cmd.split_whitespace().map(str::to_string);
                let program = parts
                    .next()
                    .ok_or_else(|| BrowserError::InvalidCommand(cmd.to_string()))?;
                Ok(Self {
                    program,
                    args: parts.collect(),
                })
            }
            None => Ok(Self::platform_default()),
        }
    }

    #[cfg(target_os = "macos")]
    fn platform_default() -> Self {
        Self {
            program: "open".to_string(),
            args: Vec::new(),
        }
    }

    #[cfg(target_os = "windows")]
    fn platform_default() -> Self {
        Self {
            program: "rundll32".to_string(),
            args: vec!["url.dll,FileProtocolHandler".to_string()],
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn platform_default() -> Self {
        Self {
            program: "xdg-open".to_string(),
            args: Vec::new(),
        }
    }
}

#[async_trait]
impl BrowserLauncher for SystemBrowser {
    async fn open(&self, url: &str) -> Result<(), BrowserError> {
        log::debug!("Running {} {:?} {}", self.program, self.args, url);

        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .await
            .map_err(|source| BrowserError::Spawn {
                url: url.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BrowserError::ExitStatus {
                url: url.to_string(),
                status: status.to_string(),
            })
        }
    }
}

/// Launcher for `--dry-run`: resolves URLs without opening anything
pub struct DryRunBrowser;

#[async_trait]
impl BrowserLauncher for DryRunBrowser {
    async fn open(&self, url: &str) -> Result<(), BrowserError> {
        log::debug!("Dry run, not opening {}", url);
        Ok(())
    }
}
