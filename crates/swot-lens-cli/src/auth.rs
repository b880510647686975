//! Login gate: credential store, password verification, and session state.
//!
//! The store is a JSON file provisioned outside this program:
//!
//! ```json
//! { "users": { "alice": "$2b$12$..." } }
//! ```
//!
//! With the `bcrypt` scheme each value is a salted bcrypt hash. With the
//! `plaintext` scheme values are compared directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

/// bcrypt work factor used when hashing new passwords.
pub const HASH_COST: u32 = bcrypt::DEFAULT_COST;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("not logged in")]
    Unauthenticated,

    #[error("credential store {}: {message}", .path.display())]
    Store { path: PathBuf, message: String },

    #[error("failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// How stored credentials are compared against a submitted password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Stored values are bcrypt hashes.
    Bcrypt,
    /// Stored values are the passwords themselves.
    Plaintext,
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Bcrypt => f.write_str("bcrypt"),
            PasswordScheme::Plaintext => f.write_str("plaintext"),
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            "plaintext" | "plain" => Ok(PasswordScheme::Plaintext),
            other => Err(format!(
                "unknown password scheme '{other}' (expected bcrypt or plaintext)"
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StoreFile {
    #[serde(default)]
    users: HashMap<String, String>,
}

/// Read-only map of username → stored credential.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, String>,
    scheme: PasswordScheme,
}

impl CredentialStore {
    /// Load the store from a JSON file.
    pub fn load(path: &Path, scheme: PasswordScheme) -> Result<Self, AuthError> {
        let raw = std::fs::read_to_string(path).map_err(|e| AuthError::Store {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: StoreFile = serde_json::from_str(&raw).map_err(|e| AuthError::Store {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        info!(
            "loaded {} user(s) from {} ({scheme})",
            file.users.len(),
            path.display()
        );
        Ok(Self::from_users(file.users, scheme))
    }

    pub fn from_users(users: HashMap<String, String>, scheme: PasswordScheme) -> Self {
        Self { users, scheme }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check `password` for `username`.
    ///
    /// Unknown users and malformed stored hashes fail the check.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some(stored) = self.users.get(username) else {
            debug!("unknown user '{username}'");
            return false;
        };

        match self.scheme {
            PasswordScheme::Bcrypt => match bcrypt::verify(password, stored) {
                Ok(ok) => ok,
                Err(e) => {
                    warn!("stored hash for '{username}' is unusable: {e}");
                    false
                }
            },
            PasswordScheme::Plaintext => stored == password,
        }
    }
}

/// Hash `password` for storage under the bcrypt scheme.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}

/// Per-shell session. Authentication is set once and read afterwards.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify credentials and mark the session authenticated.
    ///
    /// Once authenticated, later calls leave the session unchanged.
    pub fn login(
        &mut self,
        store: &CredentialStore,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        if let Some(ref user) = self.user {
            debug!("session already authenticated as '{user}'");
            return Ok(());
        }

        let username = username.trim();
        if !store.verify(username, password) {
            return Err(AuthError::InvalidCredentials);
        }

        info!("user '{username}' logged in");
        self.user = Some(username.to_string());
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Route guard for analysis requests. Returns the logged-in user.
    pub fn require_auth(&self) -> Result<&str, AuthError> {
        self.user.as_deref().ok_or(AuthError::Unauthenticated)
    }
}
