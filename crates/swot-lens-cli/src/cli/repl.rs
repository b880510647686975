// Copyright 2026 SWOT Lens Contributors
// SPDX-License-Identifier: MIT

//! Interactive shell: log in, then analyze websites with slash commands.
//!
//! Launch with `swot-lens` (no subcommand). Type `/help` for commands.
//! Line history lives in memory only and is gone when the shell exits.

use crate::auth::Session;
use crate::cli::login;
use crate::cli::output::Styled;
use crate::cli::repl_commands;
use crate::cli::repl_complete;
use crate::config::Settings;
use anyhow::Result;
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

fn print_banner(settings: &Settings) {
    let s = Styled::new();

    eprintln!();
    eprintln!(
        "  {} {} {}",
        s.green("\u{25c9}"),
        s.bold(&format!("SWOT Lens v{}", env!("CARGO_PKG_VERSION"))),
        s.dim("— keyword SWOT analysis for company websites")
    );
    eprintln!(
        "    Credentials: {} ({})",
        s.dim(&settings.credentials_path.display().to_string()),
        settings.scheme
    );
    eprintln!();
}

/// Run the interactive shell.
pub async fn run(settings: Settings) -> Result<()> {
    print_banner(&settings);

    let store = login::load_store(&settings)?;
    let mut session = Session::new();
    login::prompt_login(&store, &mut session)?;

    let s = Styled::new();
    eprintln!(
        "    Enter a company website URL, {} for commands, {} to quit.",
        s.cyan("/help"),
        s.dim("/exit")
    );
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<repl_complete::SwotHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(repl_complete::SwotHelper::new()));

    let mut state = repl_commands::ReplState::new(session, settings);

    let prompt = if s.uses_color() {
        " \x1b[36mswot>\x1b[0m ".to_string()
    } else {
        " swot> ".to_string()
    };

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match repl_commands::execute(line, &mut state).await {
                    Ok(true) => {
                        eprintln!("  {} Goodbye!", s.dim("\u{2728}"));
                        break;
                    }
                    Ok(false) => {}
                    Err(e) => {
                        eprintln!("  {} {e:#}", s.fail_sym());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  {} Type {} to quit.", s.dim("(Ctrl+C)"), s.bold("/exit"));
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  {} Goodbye!", s.dim("\u{2728}"));
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    Ok(())
}
