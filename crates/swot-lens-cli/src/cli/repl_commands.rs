// Copyright 2026 SWOT Lens Contributors
// SPDX-License-Identifier: MIT

//! Slash command parsing and dispatch for the SWOT Lens shell.

use crate::auth::Session;
use crate::cli::analyze_cmd;
use crate::cli::output::{self, Styled};
use crate::cli::repl_complete::{suggest_command, COMMANDS};
use crate::config::Settings;
use crate::present;
use anyhow::Result;
use swot_lens::{Analysis, Analyzer};

/// Shell state preserved across commands.
pub struct ReplState {
    pub session: Session,
    pub settings: Settings,
    pub analyzer: Analyzer,
    /// Most recent successful analysis, replaced by the next one.
    pub last: Option<Analysis>,
}

impl ReplState {
    pub fn new(session: Session, settings: Settings) -> Self {
        let analyzer = Analyzer::http(&settings.user_agent);
        Self {
            session,
            settings,
            analyzer,
            last: None,
        }
    }
}

/// A parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Help,
    Clear,
    Analyze(&'a str),
    Table,
    Top,
    WhoAmI,
    Settings,
    Unknown(&'a str),
}

/// Parse one line. Bare http(s) URLs analyze directly.
pub fn parse(input: &str) -> Command<'_> {
    let input = input.trim();

    let lower = input.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Command::Analyze(input);
    }

    let input = input.strip_prefix('/').unwrap_or(input);
    if input.is_empty() {
        return Command::Help;
    }

    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    match cmd {
        "exit" | "quit" | "q" => Command::Exit,
        "help" | "h" | "?" => Command::Help,
        "clear" | "cls" => Command::Clear,
        "analyze" | "a" | "swot" => Command::Analyze(args),
        "table" => Command::Table,
        "top" => Command::Top,
        "whoami" => Command::WhoAmI,
        "settings" | "config" => Command::Settings,
        other => Command::Unknown(other),
    }
}

/// Parse and execute a line. Returns `true` if the shell should exit.
pub async fn execute(input: &str, state: &mut ReplState) -> Result<bool> {
    match parse(input) {
        Command::Exit => return Ok(true),
        Command::Help => cmd_help(),
        Command::Clear => cmd_clear(),
        Command::Analyze(url) => cmd_analyze(url, state).await?,
        Command::Table => cmd_table(state),
        Command::Top => cmd_top(state),
        Command::WhoAmI => cmd_whoami(state),
        Command::Settings => cmd_settings(state)?,
        Command::Unknown(cmd) => {
            let s = Styled::new();
            if let Some(suggestion) = suggest_command(cmd) {
                eprintln!(
                    "  {} Unknown command '/{cmd}'. Did you mean {}?",
                    s.warn_sym(),
                    s.bold(suggestion)
                );
            } else {
                eprintln!(
                    "  {} Unknown command '/{cmd}'. Type {} for commands.",
                    s.warn_sym(),
                    s.bold("/help")
                );
            }
        }
    }

    Ok(false)
}

/// /help — Show available commands.
fn cmd_help() {
    let s = Styled::new();
    eprintln!();
    eprintln!("  {}", s.bold("Commands:"));
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {:<14} {}", s.cyan(cmd), s.dim(desc));
    }
    eprintln!();
    eprintln!(
        "  {}",
        s.dim("Tip: paste a URL on its own to analyze it.")
    );
    eprintln!();
}

/// /clear — Clear the terminal.
fn cmd_clear() {
    eprint!("\x1b[2J\x1b[H");
}

/// /analyze <url> — Fetch the page and show its SWOT keyword counts.
async fn cmd_analyze(url: &str, state: &mut ReplState) -> Result<()> {
    match analyze_cmd::analyze(&state.analyzer, &state.session, url).await? {
        Ok(analysis) => {
            analyze_cmd::print_analysis(&analysis);
            state.last = Some(analysis);
        }
        Err(e) => analyze_cmd::report_failure(&e),
    }
    Ok(())
}

fn no_result_hint(s: &Styled) {
    eprintln!(
        "  {} No analysis yet. Try {}",
        s.info_sym(),
        s.bold("/analyze https://example.com")
    );
}

/// /table — Re-render the last result as word/count tables.
fn cmd_table(state: &ReplState) {
    let s = Styled::new();
    let Some(ref analysis) = state.last else {
        no_result_hint(&s);
        return;
    };

    eprintln!();
    eprintln!("  {}", s.dim(&analysis.final_url));
    eprintln!();
    eprint!("{}", present::render_table(&analysis.swot, &s));
}

/// /top — Show the ranked words of the last result.
fn cmd_top(state: &ReplState) {
    let s = Styled::new();
    let Some(ref analysis) = state.last else {
        no_result_hint(&s);
        return;
    };

    eprintln!();
    eprint!("{}", present::render_ranked(&analysis.ranked, &s));
    eprintln!();
}

/// /whoami — Show the logged-in user.
fn cmd_whoami(state: &ReplState) {
    let s = Styled::new();
    match state.session.user() {
        Some(user) => eprintln!("  Logged in as {}", s.bold(user)),
        None => eprintln!("  {} Not logged in.", s.warn_sym()),
    }
}

/// /settings — Show resolved configuration.
fn cmd_settings(state: &ReplState) -> Result<()> {
    if output::is_json() {
        output::print_json(&serde_json::to_value(&state.settings)?);
        return Ok(());
    }

    let s = Styled::new();
    eprintln!();
    output::print_section(&s, "Settings");
    eprintln!(
        "    {:<14} {}",
        "credentials",
        state.settings.credentials_path.display()
    );
    eprintln!("    {:<14} {}", "scheme", state.settings.scheme);
    eprintln!("    {:<14} {}", "user agent", state.settings.user_agent);
    eprintln!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("/exit"), Command::Exit);
        assert_eq!(parse("q"), Command::Exit);
        assert_eq!(parse("/"), Command::Help);
        assert_eq!(parse("/table"), Command::Table);
        assert_eq!(parse("/settings"), Command::Settings);
        assert_eq!(parse("/frobnicate now"), Command::Unknown("frobnicate"));
    }

    #[test]
    fn test_parse_analyze() {
        assert_eq!(
            parse("/analyze https://acme.test"),
            Command::Analyze("https://acme.test")
        );
        assert_eq!(parse("  https://acme.test/about "), Command::Analyze("https://acme.test/about"));
        assert_eq!(parse("HTTPS://acme.test"), Command::Analyze("HTTPS://acme.test"));
        assert_eq!(parse("Http://acme.test/"), Command::Analyze("Http://acme.test/"));
        assert_eq!(parse("/analyze"), Command::Analyze(""));
        assert_eq!(parse("/analyze    "), Command::Analyze(""));
    }

    fn state() -> ReplState {
        let settings = Settings::resolve_with(Overrides::default(), |_| None).unwrap();
        ReplState::new(Session::new(), settings)
    }

    #[tokio::test]
    async fn test_exit_and_help() {
        let mut state = state();
        assert!(execute("/exit", &mut state).await.unwrap());
        assert!(!execute("/help", &mut state).await.unwrap());
    }

    #[tokio::test]
    async fn test_analyze_refused_before_login() {
        let mut state = state();
        let err = execute("/analyze https://acme.test", &mut state)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not logged in"));
        assert!(state.last.is_none());
    }
}
