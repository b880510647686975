//! Keyword-based SWOT categorization.
//!
//! Membership is purely lexical: a ranked token lands in a category when it
//! is one of that category's keywords. Categories are independent, so a
//! keyword listed under two categories ("challenge") shows up in both.

use crate::rank::RankedToken;
use fnv::FnvHashSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// The four SWOT categories, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Strengths,
        Category::Weaknesses,
        Category::Opportunities,
        Category::Threats,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Strengths => "Strengths",
            Category::Weaknesses => "Weaknesses",
            Category::Opportunities => "Opportunities",
            Category::Threats => "Threats",
        }
    }

    /// Built-in keywords for this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Strengths => &["innovative", "leading", "best", "quality"],
            Category::Weaknesses => &["challenge", "improve", "issue"],
            Category::Opportunities => &["growth", "expansion", "new"],
            Category::Threats => &["competitor", "risk", "challenge"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category → keyword set. Immutable once built.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    sets: IndexMap<Category, FnvHashSet<&'static str>>,
}

impl KeywordTable {
    /// The built-in table, created on first use and shared afterwards.
    pub fn standard() -> &'static KeywordTable {
        static TABLE: OnceLock<KeywordTable> = OnceLock::new();
        TABLE.get_or_init(|| KeywordTable {
            sets: Category::ALL
                .iter()
                .map(|&c| (c, c.keywords().iter().copied().collect()))
                .collect(),
        })
    }

    /// Whether `word` is a keyword of `category`.
    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.sets
            .get(&category)
            .is_some_and(|set| set.contains(word))
    }

    /// Categories that list `word`, in presentation order.
    pub fn categories_of(&self, word: &str) -> Vec<Category> {
        self.sets
            .iter()
            .filter(|(_, set)| set.contains(word))
            .map(|(&c, _)| c)
            .collect()
    }

    /// Split `ranked` into per-category subsequences, preserving order.
    pub fn categorize(&self, ranked: &[RankedToken]) -> SwotResult {
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let matches: Vec<RankedToken> = ranked
                    .iter()
                    .filter(|t| self.contains(category, &t.word))
                    .cloned()
                    .collect();
                debug!("{category}: {} match(es)", matches.len());
                (category, matches)
            })
            .collect();

        SwotResult { categories }
    }
}

/// Categorize with the built-in keyword table.
pub fn categorize(ranked: &[RankedToken]) -> SwotResult {
    KeywordTable::standard().categorize(ranked)
}

/// Per-category matches, always holding all four categories in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwotResult {
    categories: IndexMap<Category, Vec<RankedToken>>,
}

impl SwotResult {
    /// Matches for `category`. Empty if nothing matched.
    pub fn get(&self, category: Category) -> &[RankedToken] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate categories in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[RankedToken])> {
        self.categories.iter().map(|(&c, v)| (c, v.as_slice()))
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(pairs: &[(&str, usize)]) -> Vec<RankedToken> {
        pairs.iter().map(|&(w, c)| RankedToken::new(w, c)).collect()
    }

    #[test]
    fn test_categorize_preserves_rank_order() {
        let input = ranked(&[
            ("innovative", 2),
            ("leading", 1),
            ("product", 1),
            ("competitor", 1),
            ("growth", 1),
        ]);
        let result = categorize(&input);

        assert_eq!(
            result.get(Category::Strengths),
            ranked(&[("innovative", 2), ("leading", 1)]).as_slice()
        );
        assert!(result.get(Category::Weaknesses).is_empty());
        assert_eq!(result.get(Category::Opportunities), ranked(&[("growth", 1)]).as_slice());
        assert_eq!(result.get(Category::Threats), ranked(&[("competitor", 1)]).as_slice());
    }

    #[test]
    fn test_challenge_is_shared() {
        let result = categorize(&ranked(&[("challenge", 3)]));
        assert_eq!(result.get(Category::Weaknesses), ranked(&[("challenge", 3)]).as_slice());
        assert_eq!(result.get(Category::Threats), ranked(&[("challenge", 3)]).as_slice());
        assert_eq!(
            KeywordTable::standard().categories_of("challenge"),
            vec![Category::Weaknesses, Category::Threats]
        );
    }

    #[test]
    fn test_every_match_is_member_and_ranked() {
        let input = ranked(&[
            ("new", 5),
            ("risk", 4),
            ("best", 3),
            ("issue", 2),
            ("widget", 2),
            ("expansion", 1),
        ]);
        let table = KeywordTable::standard();
        let result = table.categorize(&input);

        for (category, matches) in result.iter() {
            for m in matches {
                assert!(table.contains(category, &m.word));
                assert!(input.contains(m));
            }
        }
    }

    #[test]
    fn test_all_categories_present_in_order() {
        let result = categorize(&[]);
        let order: Vec<Category> = result.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert!(result.is_empty());
    }

    #[test]
    fn test_serializes_with_category_labels() {
        let result = categorize(&ranked(&[("growth", 2)]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["Opportunities"][0]["word"], "growth");
        assert_eq!(json["Opportunities"][0]["count"], 2);
        assert_eq!(json["Strengths"], serde_json::json!([]));
    }
}
