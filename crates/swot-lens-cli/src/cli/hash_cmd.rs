//! `swot-lens hash-password` — produce a bcrypt hash for the credential store.

use crate::auth::hash_password;
use crate::cli::output::{self, Styled};
use anyhow::Result;
use dialoguer::Password;

/// Prompt for a password (twice) and print its hash on stdout.
pub fn run() -> Result<()> {
    let password = Password::new()
        .with_prompt("  New password")
        .with_confirmation("  Repeat password", "  Passwords do not match")
        .interact()?;

    let hash = hash_password(&password)?;

    if output::is_json() {
        output::print_json(&serde_json::json!({ "hash": hash }));
        return Ok(());
    }

    println!("{hash}");
    if !output::is_quiet() {
        let s = Styled::new();
        eprintln!(
            "  {} Add it to the store as {}",
            s.info_sym(),
            s.dim(r#"{"users": {"<name>": "<hash>"}}"#)
        );
    }
    Ok(())
}
