//! Heuristic query classification
//!
//! Rules are evaluated top to bottom and the first match wins. Anything that
//! matches no rule is treated as an item.

use regex::Regex;
use std::sync::LazyLock;

use super::Category;

/// Boss names, matched as case-insensitive substrings
pub const BOSSES: &[&str] = &[
    "reshala",
    "killa",
    "shturman",
    "sanitar",
    "glukhar",
    "tagilla",
    "kaban",
    "kollontay",
];

static QUEST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(debut|first|guide|setup|kind|checking)").unwrap());

static CALIBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+x\d+").unwrap());

// Unanchored, so abbreviations also match inside longer words
static AMMO_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(ap|bp|bt|ps|pst|m995|m855|m856|fmj)").unwrap());

static KEY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(room|dorm|office|factory|customs)").unwrap());

/// A single classification rule. Predicates receive the lowercased query.
pub struct Rule {
    pub category: Category,
    pub matches: fn(&str) -> bool,
}

/// Ordered rule table
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::Boss,
        matches: is_boss,
    },
    Rule {
        category: Category::Quest,
        matches: is_quest,
    },
    Rule {
        category: Category::Ammo,
        matches: is_ammo,
    },
    Rule {
        category: Category::Key,
        matches: is_key,
    },
];

fn is_boss(q: &str) -> bool {
    BOSSES.iter().any(|boss| q.contains(boss))
}

fn is_quest(q: &str) -> bool {
    q.contains("quest") || QUEST_PREFIX.is_match(q)
}

fn is_ammo(q: &str) -> bool {
    q.contains("ammo") || CALIBER.is_match(q) || AMMO_TYPE.is_match(q)
}

fn is_key(q: &str) -> bool {
    q.contains("key") || KEY_PREFIX.is_match(q)
}

/// Classify a raw query
pub fn classify(query: &str) -> Category {
    let lower = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map(|rule| rule.category)
        .unwrap_or(Category::Item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_queries() {
        assert_eq!(classify("5.45x39 BP"), Category::Ammo);
        assert_eq!(classify("Dorm room 314"), Category::Key);
        assert_eq!(classify("Debut"), Category::Quest);
        assert_eq!(classify("RIP"), Category::Item);
    }

    #[test]
    fn test_boss_names_any_case() {
        for boss in BOSSES {
            assert_eq!(classify(boss), Category::Boss, "{boss}");
            assert_eq!(classify(&boss.to_uppercase()), Category::Boss, "{boss}");
        }
        assert_eq!(classify("Reshala"), Category::Boss);
    }

    #[test]
    fn test_boss_beats_other_rules() {
        // Each of these would also satisfy a lower-priority rule
        assert_eq!(classify("Killa quest"), Category::Boss);
        assert_eq!(classify("Tagilla 12x70 ammo"), Category::Boss);
        assert_eq!(classify("Sanitar office key"), Category::Boss);
        assert_eq!(classify("Debut Shturman"), Category::Boss);
    }

    #[test]
    fn test_quest_rules() {
        assert_eq!(classify("Shootout Picnic quest"), Category::Quest);
        assert_eq!(classify("Checking"), Category::Quest);
        assert_eq!(classify("Setup"), Category::Quest);
        // Prefix words only count at the start
        assert_eq!(classify("The first"), Category::Item);
    }

    #[test]
    fn test_quest_beats_ammo_and_key() {
        assert_eq!(classify("quest for 7.62x39 ammo"), Category::Quest);
        assert_eq!(classify("First key"), Category::Quest);
    }

    #[test]
    fn test_ammo_rules() {
        assert_eq!(classify("7.62x51 M80"), Category::Ammo);
        assert_eq!(classify("12x70 buckshot"), Category::Ammo);
        assert_eq!(classify("Ammo case"), Category::Ammo);
        assert_eq!(classify("M855A1"), Category::Ammo);
        assert_eq!(classify("5.56 FMJ"), Category::Ammo);
        assert_eq!(classify("PS gzh"), Category::Ammo);
    }

    #[test]
    fn test_ammo_abbreviations_match_inside_words() {
        assert_eq!(classify("Graphics card"), Category::Ammo);
        assert_eq!(classify("Tapco"), Category::Ammo);
        assert_eq!(classify("Maps"), Category::Ammo);
        assert_eq!(classify("Bottle of water"), Category::Item);
    }

    #[test]
    fn test_earlier_rules_win_over_abbreviations() {
        assert_eq!(classify("Setup"), Category::Quest);
        assert_eq!(classify("Kaban's apartment"), Category::Boss);
    }

    #[test]
    fn test_key_rules() {
        assert_eq!(classify("Marked key"), Category::Key);
        assert_eq!(classify("Factory exit"), Category::Key);
        assert_eq!(classify("Customs office"), Category::Key);
        assert_eq!(classify("Keycard with a blue marking"), Category::Key);
    }

    #[test]
    fn test_default_is_item() {
        assert_eq!(classify("LEDX"), Category::Item);
        assert_eq!(classify("Salewa first aid kit"), Category::Item);
        assert_eq!(classify(""), Category::Item);
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<Category> = RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![Category::Boss, Category::Quest, Category::Ammo, Category::Key]
        );
    }
}
