//! Token frequency counting and top-N ranking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of tokens kept by [`FrequencyTable::top`] in the standard pipeline.
pub const TOP_N: usize = 10;

/// A token and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedToken {
    pub word: String,
    pub count: usize,
}

impl RankedToken {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Occurrence counts keyed by token, iterated in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    /// Count every token in `tokens`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `token`, or 0 if it never occurred.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the length of the counted token list.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(token, count)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The `n` most frequent tokens, count descending.
    ///
    /// The sort is stable, so equal counts keep first-appearance order.
    pub fn top(&self, n: usize) -> Vec<RankedToken> {
        let mut ranked: Vec<RankedToken> = self
            .iter()
            .map(|(word, count)| RankedToken::new(word, count))
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

/// Count `tokens` and return the top [`TOP_N`].
pub fn rank_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<RankedToken> {
    FrequencyTable::from_tokens(tokens).top(TOP_N)
}
