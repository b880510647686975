//! Runtime settings, resolved once at startup.
//!
//! Precedence: command-line flag, then environment variable, then default.

use crate::auth::PasswordScheme;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::PathBuf;

pub const ENV_CREDENTIALS: &str = "SWOT_LENS_CREDENTIALS";
pub const ENV_SCHEME: &str = "SWOT_LENS_SCHEME";
pub const ENV_USER_AGENT: &str = "SWOT_LENS_USER_AGENT";
pub const ENV_PASSWORD: &str = "SWOT_LENS_PASSWORD";

/// Home directory for SWOT Lens files (`~/.swot-lens`).
pub fn swot_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".swot-lens")
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub credentials: Option<PathBuf>,
    pub scheme: Option<PasswordScheme>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// JSON credential store.
    pub credentials_path: PathBuf,
    /// How stored credentials are verified.
    pub scheme: PasswordScheme,
    /// `User-Agent` for page fetches.
    pub user_agent: String,
}

impl Settings {
    /// Resolve settings from flags and the process environment.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve settings using `env` as the environment lookup.
    pub fn resolve_with<F>(overrides: Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials_path = overrides
            .credentials
            .or_else(|| env(ENV_CREDENTIALS).map(PathBuf::from))
            .unwrap_or_else(|| swot_home().join("credentials.json"));

        let scheme = match overrides.scheme {
            Some(scheme) => scheme,
            None => match env(ENV_SCHEME) {
                Some(raw) => raw
                    .parse::<PasswordScheme>()
                    .map_err(|e: String| anyhow!("{ENV_SCHEME}: {e}"))?,
                None => PasswordScheme::Bcrypt,
            },
        };

        let user_agent = env(ENV_USER_AGENT)
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| swot_lens::fetch::DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            credentials_path,
            scheme,
            user_agent,
        })
    }
}
