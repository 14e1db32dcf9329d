//! JSON file cache storage
//!
//! The whole mapping is read on construction and rewritten after every
//! mutation. All failures during a search are reported to the diagnostic
//! sink and otherwise ignored: the cache is best-effort.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{CacheEntry, cache_key, now_millis};
use crate::diagnostics::DiagnosticSink;
use crate::error::CacheError;
use crate::search::Category;

type Result<T> = std::result::Result<T, CacheError>;

/// File-backed cache of search results
pub struct CacheStore {
    /// `None` when caching is disabled
    path: Option<PathBuf>,
    entries: BTreeMap<String, CacheEntry>,
    sink: Arc<dyn DiagnosticSink>,
}

impl CacheStore {
    /// Get the cache directory path (~/.cache/tarkov-search on Linux)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoCacheDir)?;
        Ok(cache_base.join("tarkov-search"))
    }

    /// Default cache file location
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::cache_dir()?.join("cache.json"))
    }

    /// Load the cache file at `path`, sweeping expired entries.
    ///
    /// Never fails: unreadable or malformed files yield an empty cache.
    pub fn load(path: impl Into<PathBuf>, sink: Arc<dyn DiagnosticSink>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(raw) => decode_entries(raw, sink.as_ref()),
            Err(e) => {
                sink.warn(&format!("Could not load cache: {}", e));
                BTreeMap::new()
            }
        };

        let mut store = Self {
            path: Some(path),
            entries,
            sink,
        };

        let removed = store.sweep_expired(now_millis());
        if removed > 0 {
            log::debug!("Removed {} expired cache entries", removed);
            store.save();
        }
        store
    }

    /// A store that never reads or writes and always misses
    pub fn disabled(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
            sink,
        }
    }

    /// Backing file, if caching is enabled
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Look up a query. Expired entries are reported as absent but kept;
    /// only the load-time sweep deletes them.
    pub fn get(&self, query: &str) -> Option<&CacheEntry> {
        let now = now_millis();
        self.entries
            .get(&cache_key(query))
            .filter(|entry| entry.is_fresh(now))
    }

    /// Store a result for `query` and persist immediately
    pub fn set(
        &mut self,
        query: &str,
        category: Category,
        primary_url: &str,
        secondary_url: &str,
    ) {
        if self.path.is_none() {
            return;
        }

        let entry = CacheEntry {
            query: query.to_string(),
            category,
            primary_url: primary_url.to_string(),
            secondary_url: secondary_url.to_string(),
            created_at: now_millis(),
        };
        self.entries.insert(cache_key(query), entry);
        self.save();
    }

    /// Persist the mapping, reporting failures to the sink
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            self.sink.warn(&format!("Could not save cache: {}", e));
        }
    }

    /// Persist the mapping, returning any failure
    pub fn try_save(&self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| CacheError::Write {
                path: path.clone(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, contents).map_err(|source| CacheError::Write {
            path: path.clone(),
            source,
        })
    }

    /// Remove every entry and persist the empty mapping
    pub fn clear(&mut self) -> Result<usize> {
        let removed = self.entries.len();
        self.entries.clear();
        self.try_save()?;
        Ok(removed)
    }

    /// Entries in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CacheEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary of the cache contents
    pub fn stats(&self) -> CacheStats {
        let size_bytes = self
            .path
            .as_ref()
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .unwrap_or(0);

        CacheStats {
            entries: self.entries.len(),
            size_bytes,
            oldest_entry: self.entries.values().map(|e| e.created_at).min(),
            newest_entry: self.entries.values().map(|e| e.created_at).max(),
        }
    }

    /// Drop entries older than the TTL at `now`, returning the count
    fn sweep_expired(&mut self, now: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub entries: usize,
    pub size_bytes: u64,
    pub oldest_entry: Option<i64>,
    pub newest_entry: Option<i64>,
}

/// Read the raw top-level object; a missing file is an empty cache
fn read_entries(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }

    let data = std::fs::read_to_string(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

/// Decode entries one by one so a single bad record does not discard the rest
fn decode_entries(
    raw: Map<String, Value>,
    sink: &dyn DiagnosticSink,
) -> BTreeMap<String, CacheEntry> {
    raw.into_iter()
        .filter_map(|(key, value)| match serde_json::from_value::<CacheEntry>(value) {
            Ok(entry) => Some((key, entry)),
            Err(e) => {
                sink.warn(&format!("Skipping malformed cache entry '{}': {}", key, e));
                None
            }
        })
        .collect()
}
