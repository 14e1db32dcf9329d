//! Persisted cache record

use serde::{Deserialize, Serialize};

use super::CacheTtl;
use crate::search::Category;

/// A previous search result.
///
/// Field names follow the on-disk format. Unknown fields are ignored on
/// read so newer files stay loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Query as originally typed
    pub query: String,

    /// Resolved category
    #[serde(rename = "type")]
    pub category: Category,

    /// tarkov.dev URL
    #[serde(rename = "tarkovDevUrl")]
    pub primary_url: String,

    /// Wiki URL
    #[serde(rename = "wikiUrl")]
    pub secondary_url: String,

    /// Creation time, Unix epoch milliseconds
    #[serde(rename = "timestamp")]
    pub created_at: i64,
}

impl CacheEntry {
    /// Age at `now` (epoch ms); saturates for timestamps far out of range
    pub fn age(&self, now: i64) -> i64 {
        now.saturating_sub(self.created_at)
    }

    /// Whether lookups may still return the entry at `now`
    pub fn is_fresh(&self, now: i64) -> bool {
        self.age(now) < CacheTtl::entry_millis()
    }

    /// Whether the load sweep should delete the entry at `now`.
    ///
    /// An entry exactly one TTL old is no longer fresh but is not yet
    /// deleted.
    pub fn is_expired(&self, now: i64) -> bool {
        self.age(now) > CacheTtl::entry_millis()
    }
}
