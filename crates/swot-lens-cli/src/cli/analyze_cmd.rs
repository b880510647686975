//! `swot-lens analyze <url>` — one-shot analysis, plus the result/failure
//! reporting shared with the interactive shell.

use crate::auth::Session;
use crate::cli::login;
use crate::cli::output::{self, Styled};
use crate::cli::repl_progress;
use crate::config::{Settings, ENV_PASSWORD};
use crate::present;
use anyhow::{bail, Result};
use swot_lens::{Analysis, AnalysisError, Analyzer};

/// Run a single authenticated analysis and print the result.
pub async fn run(settings: &Settings, url: &str, user: &str) -> Result<()> {
    let store = login::load_store(settings)?;
    let mut session = Session::new();
    login::login_as(&store, &mut session, user, std::env::var(ENV_PASSWORD).ok())?;

    let analyzer = Analyzer::http(&settings.user_agent);
    match analyze(&analyzer, &session, url).await? {
        Ok(analysis) => {
            print_analysis(&analysis);
            Ok(())
        }
        Err(e) => {
            report_failure(&e);
            bail!("analysis of '{}' failed", url.trim())
        }
    }
}

/// Guard, then run the pipeline behind a spinner.
///
/// The outer `Result` carries authentication failures; the inner one
/// carries analysis failures, which callers report and recover from.
pub async fn analyze(
    analyzer: &Analyzer,
    session: &Session,
    url: &str,
) -> Result<Result<Analysis, AnalysisError>> {
    session.require_auth()?;

    let spinner = repl_progress::create_spinner(&format!("Analyzing {}...", url.trim()));
    let result = analyzer.analyze(url).await;
    spinner.finish_and_clear();

    Ok(result)
}

/// Print a successful analysis as JSON or as charts.
pub fn print_analysis(analysis: &Analysis) {
    if output::is_json() {
        output::print_json(&present::analysis_json(analysis));
        return;
    }

    let s = Styled::new();
    eprintln!();
    output::print_section(&s, "SWOT Analysis Results");
    eprintln!("{}", present::render_summary(analysis, &s));
    eprintln!();
    if output::is_verbose() {
        eprintln!("{}", present::render_ranked(&analysis.ranked, &s));
    }
    eprint!("{}", present::render_chart(&analysis.swot, &s));
}

/// User-facing message for an analysis failure.
pub fn failure_message(err: &AnalysisError) -> String {
    match err {
        AnalysisError::EmptyInput => "Please provide a website address to analyze.".to_string(),
        AnalysisError::Fetch(e) => format!("Could not retrieve the page: {e}"),
        AnalysisError::EmptyContent { url } => {
            format!("Unable to retrieve content: no usable text found at {url}")
        }
    }
}

fn failure_kind(err: &AnalysisError) -> &'static str {
    match err {
        AnalysisError::EmptyInput => "empty_input",
        AnalysisError::Fetch(_) => "fetch_failed",
        AnalysisError::EmptyContent { .. } => "empty_content",
    }
}

/// Print an analysis failure. Empty input is a warning, the rest are errors.
pub fn report_failure(err: &AnalysisError) {
    if output::is_json() {
        output::print_json(&serde_json::json!({
            "error": failure_kind(err),
            "message": failure_message(err),
        }));
        return;
    }

    let s = Styled::new();
    let sym = match err {
        AnalysisError::EmptyInput => s.warn_sym(),
        _ => s.fail_sym(),
    };
    eprintln!("  {sym} {}", failure_message(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use swot_lens::FetchError;

    #[test]
    fn test_failure_messages_are_distinct() {
        let empty = failure_message(&AnalysisError::EmptyInput);
        let fetch = failure_message(&AnalysisError::Fetch(FetchError::Status {
            url: "https://acme.test/".to_string(),
            status: 404,
        }));
        let content = failure_message(&AnalysisError::EmptyContent {
            url: "https://acme.test/".to_string(),
        });

        assert!(empty.contains("provide a website address"));
        assert!(fetch.contains("Could not retrieve"));
        assert!(fetch.contains("404"));
        assert!(content.starts_with("Unable to retrieve content"));
    }

    #[tokio::test]
    async fn test_analyze_requires_login() {
        let analyzer = Analyzer::http("swot-lens-test");
        let session = Session::new();

        let err = analyze(&analyzer, &session, "https://acme.test").await.unwrap_err();

        assert!(err.to_string().contains("not logged in"));
    }

    #[tokio::test]
    async fn test_analyze_empty_input_after_login() {
        use crate::auth::{CredentialStore, PasswordScheme};

        let users = std::collections::HashMap::from([("ann".to_string(), "pw".to_string())]);
        let store = CredentialStore::from_users(users, PasswordScheme::Plaintext);
        let mut session = Session::new();
        session.login(&store, "ann", "pw").unwrap();
        let analyzer = Analyzer::http("swot-lens-test");

        let result = analyze(&analyzer, &session, "").await.unwrap();

        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
    }
}
