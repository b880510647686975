//! Stopword filtering.
//!
//! The English list is built once per process and shared through an `Arc`;
//! tokenizers receive it as an injected, read-only dependency.

use fnv::FnvHashSet;
use std::sync::{Arc, OnceLock};

/// English stopwords (NLTK corpus list, plus "every").
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "every", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should",
    "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't",
    "won", "won't", "wouldn", "wouldn't",
];

/// A fixed set of lower-case stopwords.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FnvHashSet<String>,
}

impl StopwordFilter {
    /// The process-wide English filter. Built on first use, shared afterwards.
    pub fn english() -> Arc<StopwordFilter> {
        static ENGLISH_FILTER: OnceLock<Arc<StopwordFilter>> = OnceLock::new();
        ENGLISH_FILTER
            .get_or_init(|| Arc::new(Self::from_list(ENGLISH)))
            .clone()
    }

    /// Create a filter from a custom list. Entries are lower-cased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check whether `word` is a stopword. Expects lower-case input.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_common_words() {
        let filter = StopwordFilter::english();
        for word in ["the", "and", "our", "with", "every", "is", "don't"] {
            assert!(filter.is_stopword(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn test_keywords_are_not_stopwords() {
        let filter = StopwordFilter::english();
        for word in [
            "innovative", "leading", "best", "quality", "challenge", "improve", "issue", "growth",
            "expansion", "new", "competitor", "risk",
        ] {
            assert!(!filter.is_stopword(word), "{word} must survive filtering");
        }
    }

    #[test]
    fn test_english_is_shared() {
        let a = StopwordFilter::english();
        let b = StopwordFilter::english();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), ENGLISH.len());
    }

    #[test]
    fn test_custom_list_is_lowercased() {
        let filter = StopwordFilter::from_list(&["Foo", "BAR"]);
        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("bar"));
        assert!(!filter.is_stopword("baz"));
        assert!(!filter.is_empty());
    }
}
