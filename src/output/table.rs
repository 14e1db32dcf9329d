//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::format_timestamp;
use crate::cache::CacheEntry;

/// One cached search in `cache list`
#[derive(Debug, Tabled)]
pub struct CacheRow {
    #[tabled(rename = "QUERY")]
    pub query: String,
    #[tabled(rename = "TYPE")]
    pub category: String,
    #[tabled(rename = "CACHED")]
    pub cached: String,
    #[tabled(rename = "TARKOV.DEV")]
    pub primary_url: String,
}

impl From<&CacheEntry> for CacheRow {
    fn from(entry: &CacheEntry) -> Self {
        Self {
            query: entry.query.clone(),
            category: entry.category.to_string(),
            cached: format_timestamp(entry.created_at),
            primary_url: entry.primary_url.clone(),
        }
    }
}

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Category;

    fn row(query: &str, category: Category) -> CacheRow {
        CacheRow::from(&CacheEntry {
            query: query.to_string(),
            category,
            primary_url: format!("https://tarkov.dev/{}", query.to_lowercase()),
            secondary_url: String::new(),
            created_at: 1_700_000_000_000,
        })
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<CacheRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![row("Killa", Category::Boss), row("LEDX", Category::Item)];
        let result = format_table(&rows);

        assert!(result.contains("QUERY"));
        assert!(result.contains("TYPE"));
        assert!(result.contains("Killa"));
        assert!(result.contains("boss"));
        assert!(result.contains("https://tarkov.dev/ledx"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&[row("RIP", Category::Item)]);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
