//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Category, SearchOutcome};

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec!["reshala", "killa"]);

        assert_eq!(output.data, vec!["reshala", "killa"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_search_outcome() {
        let outcome = SearchOutcome {
            query: "Debut".to_string(),
            category: Category::Quest,
            primary_url: "https://tarkov.dev/task/debut".to_string(),
            secondary_url: "https://escapefromtarkov.fandom.com/wiki/Debut".to_string(),
            cache_hit: false,
        };

        let result = format_json(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["data"]["type"], "quest");
        assert_eq!(value["data"]["primaryUrl"], "https://tarkov.dev/task/debut");
        assert!(value["meta"]["timestamp"].is_string());
    }
}
