// Copyright 2026 SWOT Lens Contributors
// SPDX-License-Identifier: MIT

//! Interactive username/password prompt.

use crate::auth::{AuthError, CredentialStore, Session};
use crate::cli::output::Styled;
use crate::config::Settings;
use anyhow::{bail, Context, Result};
use dialoguer::{Input, Password};

/// Failed attempts allowed before the shell gives up.
pub const MAX_ATTEMPTS: usize = 3;

/// Load the configured credential store. A store without users can never
/// admit anyone, so it is rejected up front.
pub fn load_store(settings: &Settings) -> Result<CredentialStore> {
    let store = CredentialStore::load(&settings.credentials_path, settings.scheme)
        .context("loading credential store")?;
    if store.is_empty() {
        bail!(
            "credential store {} has no users (see `swot-lens hash-password`)",
            settings.credentials_path.display()
        );
    }
    Ok(store)
}

/// Prompt for credentials until the session is authenticated.
pub fn prompt_login(store: &CredentialStore, session: &mut Session) -> Result<()> {
    let s = Styled::new();

    eprintln!("  {}", s.bold("Login"));
    eprintln!();

    for attempt in 1..=MAX_ATTEMPTS {
        let username: String = Input::new().with_prompt("  Username").interact_text()?;
        let password = Password::new().with_prompt("  Password").interact()?;

        match session.login(store, &username, &password) {
            Ok(()) => {
                eprintln!("  {} Logged in successfully!", s.ok_sym());
                eprintln!();
                return Ok(());
            }
            Err(AuthError::InvalidCredentials) => {
                let left = MAX_ATTEMPTS - attempt;
                eprintln!(
                    "  {} Incorrect username or password{}",
                    s.fail_sym(),
                    if left > 0 {
                        format!(" ({left} attempt(s) left)")
                    } else {
                        String::new()
                    }
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    bail!("too many failed login attempts")
}

/// Log in without prompting for the username; the password comes from
/// `password` when given, otherwise from a hidden prompt.
pub fn login_as(
    store: &CredentialStore,
    session: &mut Session,
    username: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt(format!("  Password for {username}"))
            .interact()?,
    };
    session.login(store, username, &password)?;
    Ok(())
}
