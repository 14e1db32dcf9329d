//! Recording browser launcher for testing
//!
//! Captures every URL instead of launching anything, and can be told to
//! fail so error propagation can be exercised.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Instant;

use super::BrowserLauncher;
use crate::error::BrowserError;

/// Mock launcher.
///
/// # Example
/// ```ignore
/// let browser = Arc::new(RecordingBrowser::new());
/// searcher.search("Killa", None).await?;
/// assert_eq!(browser.opened().len(), 2);
/// ```
#[derive(Default)]
pub struct RecordingBrowser {
    opened: Mutex<Vec<(String, Instant)>>,
    fail: bool,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every open fails
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// URLs opened so far, in order
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Time between the first and second open, if both happened
    pub fn gap(&self) -> Option<std::time::Duration> {
        let opened = self.opened.lock().unwrap();
        match opened.as_slice() {
            [(_, first), (_, second), ..] => Some(second.duration_since(*first)),
            _ => None,
        }
    }
}

#[async_trait]
impl BrowserLauncher for RecordingBrowser {
    async fn open(&self, url: &str) -> Result<(), BrowserError> {
        if self.fail {
            return Err(BrowserError::Spawn {
                url: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser available"),
            });
        }
        self.opened
            .lock()
            .unwrap()
            .push((url.to_string(), Instant::now()));
        Ok(())
    }
}
