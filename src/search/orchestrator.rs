//! Search flow: cache lookup, classification, URL building, browser launch

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::{Category, classify, primary_url, secondary_url};
use crate::browser::BrowserLauncher;
use crate::cache::CacheStore;
use crate::diagnostics::{DiagnosticSink, SearchEvent};
use crate::error::{Error, Result};

/// Pause between the two browser launches so the OS handler does not race
pub const DEFAULT_OPEN_DELAY: Duration = Duration::from_millis(500);

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub query: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub primary_url: String,
    pub secondary_url: String,
    pub cache_hit: bool,
}

/// Runs searches against one cache store.
///
/// A searcher is built per invocation (one CLI run, one HTTP request) and
/// owns its store, so no state is shared between requests.
pub struct Searcher {
    cache: CacheStore,
    browser: Arc<dyn BrowserLauncher>,
    sink: Arc<dyn DiagnosticSink>,
    open_delay: Duration,
}

impl Searcher {
    pub fn new(
        cache: CacheStore,
        browser: Arc<dyn BrowserLauncher>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            cache,
            browser,
            sink,
            open_delay: DEFAULT_OPEN_DELAY,
        }
    }

    /// Override the pause between the two launches
    pub fn with_open_delay(mut self, open_delay: Duration) -> Self {
        self.open_delay = open_delay;
        self
    }

    #[cfg(test)]
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Resolve `query` to its two URLs and open them.
    ///
    /// A valid cache entry wins over both the classifier and
    /// `category_override`. Browser failures are returned; cache failures
    /// only reach the diagnostic sink.
    pub async fn search(
        &mut self,
        query: &str,
        category_override: Option<Category>,
    ) -> Result<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::missing_query());
        }

        let outcome = match self.cache.get(query) {
            Some(entry) => {
                self.sink.event(&SearchEvent::CacheHit { query });
                SearchOutcome {
                    query: query.to_string(),
                    category: entry.category,
                    primary_url: entry.primary_url.clone(),
                    secondary_url: entry.secondary_url.clone(),
                    cache_hit: true,
                }
            }
            None => {
                let category = category_override.unwrap_or_else(|| classify(query));
                self.sink.event(&SearchEvent::Searching { query, category });

                let primary = primary_url(query, category);
                let secondary = secondary_url(query);
                self.cache.set(query, category, &primary, &secondary);

                SearchOutcome {
                    query: query.to_string(),
                    category,
                    primary_url: primary,
                    secondary_url: secondary,
                    cache_hit: false,
                }
            }
        };

        self.open_urls(&outcome.primary_url, &outcome.secondary_url).await?;
        Ok(outcome)
    }

    async fn open_urls(&self, primary: &str, secondary: &str) -> Result<()> {
        self.sink.event(&SearchEvent::Opening { url: primary });
        self.browser.open(primary).await?;

        tokio::time::sleep(self.open_delay).await;

        self.sink.event(&SearchEvent::Opening { url: secondary });
        self.browser.open(secondary).await?;
        Ok(())
    }
}
