//! End-to-end analysis: fetch → extract → tokenize → rank → categorize.
//!
//! Each request is all-or-nothing. A failure at any stage returns an
//! [`AnalysisError`] and no partial [`SwotResult`].

use crate::error::{AnalysisError, Result};
use crate::extract::visible_text;
use crate::fetch::{parse_address, Document, HttpFetcher, PageSource};
use crate::rank::{FrequencyTable, RankedToken, TOP_N};
use crate::swot::{KeywordTable, SwotResult};
use crate::tokenize::Tokenizer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of one successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Address as submitted.
    pub address: String,
    /// URL the content was actually read from.
    pub final_url: String,
    /// Tokens kept after filtering, duplicates included.
    pub token_count: usize,
    /// Distinct tokens kept after filtering.
    pub distinct_tokens: usize,
    /// The most frequent tokens, count descending.
    pub ranked: Vec<RankedToken>,
    pub swot: SwotResult,
}

/// Runs the analysis pipeline against a [`PageSource`].
pub struct Analyzer {
    source: Box<dyn PageSource>,
    tokenizer: Tokenizer,
    keywords: &'static KeywordTable,
}

impl Analyzer {
    /// Analyzer with the given page source, English stopwords and the
    /// built-in keyword table.
    pub fn new(source: Box<dyn PageSource>) -> Self {
        Self::with_parts(source, Tokenizer::default(), KeywordTable::standard())
    }

    /// Analyzer fetching over HTTP with `user_agent`.
    pub fn http(user_agent: &str) -> Self {
        Self::new(Box::new(HttpFetcher::with_user_agent(user_agent)))
    }

    pub fn with_parts(
        source: Box<dyn PageSource>,
        tokenizer: Tokenizer,
        keywords: &'static KeywordTable,
    ) -> Self {
        Self {
            source,
            tokenizer,
            keywords,
        }
    }

    /// Fetch `address` and analyze it.
    ///
    /// Blank input is rejected before any network call.
    pub async fn analyze(&self, address: &str) -> Result<Analysis> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let url = parse_address(address)?;
        info!("analyzing {url}");

        let document = self.source.fetch(&url).await?;
        self.analyze_document(address, &document)
    }

    /// Analyze an already-fetched document.
    ///
    /// The body always goes through the extractor, whatever its declared
    /// content type; plain text passes through unchanged.
    pub fn analyze_document(&self, address: &str, document: &Document) -> Result<Analysis> {
        debug!(
            "{} declared as {}",
            document.final_url,
            document.content_type.as_deref().unwrap_or("unknown")
        );
        let text = visible_text(&document.body);
        self.analyze_text(address, &document.final_url, &text)
    }

    /// Analyze raw markup as if it had been fetched from `url`.
    pub fn analyze_markup(&self, url: &str, markup: &str) -> Result<Analysis> {
        self.analyze_text(url, url, &visible_text(markup))
    }

    fn analyze_text(&self, address: &str, final_url: &str, text: &str) -> Result<Analysis> {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return Err(AnalysisError::EmptyContent {
                url: final_url.to_string(),
            });
        }

        let table = FrequencyTable::from_tokens(&tokens);
        let ranked = table.top(TOP_N);
        let swot = self.keywords.categorize(&ranked);

        debug!(
            "{final_url}: {} tokens, {} distinct, top {}",
            tokens.len(),
            table.len(),
            ranked.len()
        );

        Ok(Analysis {
            address: address.to_string(),
            final_url: final_url.to_string(),
            token_count: tokens.len(),
            distinct_tokens: table.len(),
            ranked,
            swot,
        })
    }
}
