//! Local cache of previous search results
//!
//! A flat JSON file keyed by the lowercased query. Entries expire after
//! [`CacheTtl::ENTRY`]; stale entries are swept when the file is loaded.

pub mod entry;
pub mod storage;

use std::time::Duration;

/// Cache TTL configuration
pub struct CacheTtl;

impl CacheTtl {
    pub const ENTRY: Duration = Duration::from_secs(7 * 24 * 60 * 60); // 7 days

    /// TTL in the millisecond unit used by entry timestamps
    pub fn entry_millis() -> i64 {
        Self::ENTRY.as_millis() as i64
    }
}

/// Normalize a query into its cache key
pub fn cache_key(query: &str) -> String {
    query.to_lowercase()
}

/// Current time as Unix epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// Re-export main types
pub use entry::CacheEntry;
pub use storage::{CacheStats, CacheStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_case_insensitive() {
        assert_eq!(cache_key("Reshala"), "reshala");
        assert_eq!(cache_key("RESHALA"), cache_key("reshala"));
        assert_eq!(cache_key("Dorm Room 314"), "dorm room 314");
    }

    #[test]
    fn test_entry_ttl_is_seven_days() {
        assert_eq!(CacheTtl::entry_millis(), 604_800_000);
    }
}
