//! SWOT Lens core — keyword-based SWOT classification of a web page.
//!
//! The pipeline fetches a page, extracts its visible text, tokenizes and
//! filters it, ranks the ten most frequent tokens, and sorts those into
//! Strengths, Weaknesses, Opportunities and Threats by fixed keyword lists.
//!
//! ```no_run
//! # async fn run() -> Result<(), swot_lens::AnalysisError> {
//! use swot_lens::{Analyzer, Category};
//!
//! let analyzer = Analyzer::http(swot_lens::fetch::DEFAULT_USER_AGENT);
//! let analysis = analyzer.analyze("https://example.com").await?;
//! for (word, count) in analysis.swot.get(Category::Strengths).iter().map(|t| (&t.word, t.count)) {
//!     println!("{word}: {count}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod rank;
pub mod stopwords;
pub mod swot;
pub mod tokenize;

pub use error::{AnalysisError, FetchError};
pub use fetch::{Document, HttpFetcher, PageSource};
pub use pipeline::{Analysis, Analyzer};
pub use rank::{FrequencyTable, RankedToken, TOP_N};
pub use swot::{Category, KeywordTable, SwotResult};
pub use tokenize::Tokenizer;
