//! Lookup URL construction

use super::Category;

/// Game-data site
pub const TARKOV_DEV_BASE: &str = "https://tarkov.dev";

/// Community wiki page prefix
pub const WIKI_BASE: &str = "https://escapefromtarkov.fandom.com/wiki";

/// Build the tarkov.dev URL for a query.
///
/// Ammo and keys have no per-entry page addressable by free text, so those
/// categories link to the listing pages and ignore the query.
pub fn primary_url(query: &str, category: Category) -> String {
    match category {
        Category::Item => format!("{}/item/{}", TARKOV_DEV_BASE, slug(query)),
        Category::Quest => format!("{}/task/{}", TARKOV_DEV_BASE, slug(query)),
        Category::Boss => format!("{}/boss/{}", TARKOV_DEV_BASE, slug(query)),
        Category::Ammo => format!("{}/ammo", TARKOV_DEV_BASE),
        Category::Key => format!("{}/keys", TARKOV_DEV_BASE),
    }
}

/// Build the wiki URL for a query
pub fn secondary_url(query: &str) -> String {
    let title = query.replace(' ', "_");
    format!("{}/{}", WIKI_BASE, urlencoding::encode(&title))
}

/// Percent-encoded, lowercased path segment with spaces as hyphens
fn slug(query: &str) -> String {
    urlencoding::encode(query).to_lowercase().replace("%20", "-")
}
