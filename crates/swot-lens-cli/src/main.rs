// Copyright 2026 SWOT Lens Contributors
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swot_lens_cli::auth::PasswordScheme;
use swot_lens_cli::cli::output::{self, Styled};
use swot_lens_cli::cli::{analyze_cmd, hash_cmd, repl};
use swot_lens_cli::config::{Overrides, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "swot-lens",
    version,
    about = "Keyword-based SWOT analysis of company websites"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print results as JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show ranked words and debug logging.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Credential store (JSON). Defaults to ~/.swot-lens/credentials.json.
    #[arg(long, global = true, value_name = "PATH")]
    credentials: Option<PathBuf>,

    /// How stored passwords are verified.
    #[arg(long, global = true, value_enum)]
    scheme: Option<PasswordScheme>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one website and exit.
    Analyze {
        /// Website address (http or https).
        url: String,

        /// Username to log in as. The password is read from
        /// SWOT_LENS_PASSWORD or prompted for.
        #[arg(long, short)]
        user: String,
    },
    /// Hash a password for the credential store.
    HashPassword,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("swot_lens={level}").parse()?)
                .add_directive(format!("swot_lens_cli={level}").parse()?),
        )
        .init();
    Ok(())
}

/// Publish output-mode flags for the output helpers.
fn set_output_modes(cli: &Cli) {
    let modes = [
        (cli.json, output::ENV_JSON),
        (cli.quiet, output::ENV_QUIET),
        (cli.verbose, output::ENV_VERBOSE),
        (cli.no_color, output::ENV_NO_COLOR),
    ];
    for (enabled, key) in modes {
        if enabled {
            std::env::set_var(key, "1");
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(Overrides {
        credentials: cli.credentials.clone(),
        scheme: cli.scheme,
    })?;

    match cli.command {
        None => repl::run(settings).await,
        Some(Commands::Analyze { ref url, ref user }) => {
            analyze_cmd::run(&settings, url, user).await
        }
        Some(Commands::HashPassword) => hash_cmd::run(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    set_output_modes(&cli);

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("  invalid log filter: {e}");
    }

    if let Err(e) = run(cli).await {
        let s = Styled::new();
        eprintln!("  {} {e:#}", s.fail_sym());
        std::process::exit(1);
    }
}
