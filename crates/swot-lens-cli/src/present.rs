//! Rendering of SWOT results for the terminal.
//!
//! Renderers return strings so the shell decides where output goes.

use crate::cli::output::Styled;
use swot_lens::{Analysis, Category, RankedToken, SwotResult};

/// Shown under a category with no matching words.
pub const EMPTY_PLACEHOLDER: &str = "No words found for this category.";

/// Width of the longest bar in a chart.
pub const BAR_WIDTH: usize = 30;

/// Bar of `count` scaled so that `max` fills `width` cells.
///
/// Any non-zero count gets at least one cell.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let cells = (count * width / max).max(1);
    "\u{2588}".repeat(cells)
}

fn word_column(result: &SwotResult) -> usize {
    result
        .iter()
        .flat_map(|(_, tokens)| tokens.iter())
        .map(|t| t.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("Word".len())
}

fn category_heading(s: &Styled, category: Category, tokens: &[RankedToken]) -> String {
    let heading = format!("  {}", s.bold(category.label()));
    if tokens.is_empty() {
        return format!("{heading}\n    {}\n", s.dim(EMPTY_PLACEHOLDER));
    }
    format!("{heading}\n")
}

/// Render every category as a labeled horizontal bar chart of word counts.
pub fn render_chart(result: &SwotResult, s: &Styled) -> String {
    let width = word_column(result);
    let mut out = String::new();

    for (category, tokens) in result.iter() {
        out.push_str(&category_heading(s, category, tokens));
        let max = tokens.iter().map(|t| t.count).max().unwrap_or(0);
        for token in tokens {
            out.push_str(&format!(
                "    {:<width$} {} {}\n",
                token.word,
                s.cyan(&bar(token.count, max, BAR_WIDTH)),
                token.count
            ));
        }
        out.push('\n');
    }

    out
}

/// Render every category as a two-column `Word | Count` table.
pub fn render_table(result: &SwotResult, s: &Styled) -> String {
    let width = word_column(result);
    let mut out = String::new();

    for (category, tokens) in result.iter() {
        out.push_str(&category_heading(s, category, tokens));
        if !tokens.is_empty() {
            out.push_str(&format!(
                "    {}\n",
                s.dim(&format!("{:<width$}  {:>5}", "Word", "Count"))
            ));
            for token in tokens {
                out.push_str(&format!("    {:<width$}  {:>5}\n", token.word, token.count));
            }
        }
        out.push('\n');
    }

    out
}

/// Short summary line for an analysis.
pub fn render_summary(analysis: &Analysis, s: &Styled) -> String {
    let matched: usize = analysis.swot.iter().map(|(_, t)| t.len()).sum();
    format!(
        "  {} {} tokens ({} distinct), top {} ranked, {} SWOT match(es)",
        s.dim(&analysis.final_url),
        analysis.token_count,
        analysis.distinct_tokens,
        analysis.ranked.len(),
        matched
    )
}

/// Render the ranked tokens that fed the categorizer.
pub fn render_ranked(ranked: &[RankedToken], s: &Styled) -> String {
    let mut out = format!("  {}\n", s.bold("Top words"));
    for (i, token) in ranked.iter().enumerate() {
        out.push_str(&format!("    {:>2}. {} ({})\n", i + 1, token.word, token.count));
    }
    out
}

/// JSON export of an analysis: per-category word/count rows plus context.
pub fn analysis_json(analysis: &Analysis) -> serde_json::Value {
    serde_json::json!({
        "address": analysis.address,
        "final_url": analysis.final_url,
        "token_count": analysis.token_count,
        "distinct_tokens": analysis.distinct_tokens,
        "top_words": analysis.ranked,
        "swot": analysis.swot,
    })
}
