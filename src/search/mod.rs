//! Query classification, URL building and the search flow

pub mod classify;
pub mod orchestrator;
pub mod urls;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use classify::classify;
pub use orchestrator::{SearchOutcome, Searcher};
pub use urls::{primary_url, secondary_url};

/// What kind of thing a query refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Item,
    Quest,
    Ammo,
    Key,
    Boss,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Item,
        Category::Quest,
        Category::Ammo,
        Category::Key,
        Category::Boss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Item => "item",
            Category::Quest => "quest",
            Category::Ammo => "ammo",
            Category::Key => "key",
            Category::Boss => "boss",
        }
    }

    /// Upper-case label used in progress output
    pub fn tag(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown search type '{}' (expected one of: item, quest, ammo, key, boss)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("boss".parse::<Category>(), Ok(Category::Boss));
        assert_eq!("Quest".parse::<Category>(), Ok(Category::Quest));
        assert_eq!(" key ".parse::<Category>(), Ok(Category::Key));
        assert!("weapon".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Ammo).unwrap();
        assert_eq!(json, "\"ammo\"");
        let parsed: Category = serde_json::from_str("\"item\"").unwrap();
        assert_eq!(parsed, Category::Item);
    }

    #[test]
    fn test_category_tag() {
        assert_eq!(Category::Boss.tag(), "BOSS");
        assert_eq!(Category::Item.to_string(), "item");
    }
}
