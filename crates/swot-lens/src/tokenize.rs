//! Word tokenization and filtering.

use crate::stopwords::StopwordFilter;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into lower-case, alphanumeric, non-stopword tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<StopwordFilter>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl Tokenizer {
    pub fn new(stopwords: Arc<StopwordFilter>) -> Self {
        Self { stopwords }
    }

    /// Tokenize `text` in order of appearance, keeping duplicates.
    ///
    /// Words are found with Unicode (UAX #29) word boundaries on the
    /// lower-cased text. Tokens containing any non-alphanumeric character
    /// (apostrophes, hyphens, decimal points) are dropped, as are stopwords.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .unicode_words()
            .filter(|w| w.chars().all(char::is_alphanumeric))
            .filter(|w| !self.stopwords.is_stopword(w))
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        Tokenizer::default().tokenize(text)
    }

    #[test]
    fn test_lowercases_and_drops_stopwords() {
        assert_eq!(
            tokens("Our innovative and innovative leading product beats every competitor with real growth"),
            vec![
                "innovative", "innovative", "leading", "product", "beats", "competitor", "real",
                "growth"
            ]
        );
    }

    #[test]
    fn test_drops_punctuation_and_non_alphanumeric() {
        assert_eq!(
            tokens("Growth, growth! Version 3.5 of e-mail; isn't it 2024?"),
            vec!["growth", "growth", "version", "e", "mail", "2024"]
        );
    }

    #[test]
    fn test_unicode_letters_are_alphanumeric() {
        assert_eq!(tokens("Qualité élevée"), vec!["qualité", "élevée"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokens("").is_empty());
        assert!(tokens("  ... !!! ").is_empty());
        assert!(tokens("the and of").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "New risk, new growth, new expansion.";
        assert_eq!(tokens(text), tokens(text));
    }

    #[test]
    fn test_custom_stopwords() {
        let tokenizer = Tokenizer::new(Arc::new(StopwordFilter::from_list(&["risk"])));
        assert_eq!(tokenizer.tokenize("the risk"), vec!["the"]);
    }
}
