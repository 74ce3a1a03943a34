//! Credentials and endpoint configuration
//!
//! The valid email/password pair is an external collaborator: it comes from
//! `PETFRIENDS_*` environment variables (a `.env` file is honored) or, failing
//! that, from an optional `petfriends.toml` file next to the test run.

use serde::Deserialize;
use std::path::Path;

use super::{Error, Result};

/// Public PetFriends service endpoint
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru/";

/// Remote endpoint plus the configured valid credential pair
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the remote service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Email of a registered account
    pub email: String,

    /// Password for that account
    pub password: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Settings {
    /// Load settings from the environment, falling back to `petfriends.toml`
    ///
    /// Environment variables: `PETFRIENDS_EMAIL`, `PETFRIENDS_PASSWORD` and
    /// optionally `PETFRIENDS_BASE_URL`. A `.env` file in the working
    /// directory is loaded first if present.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let email = std::env::var("PETFRIENDS_EMAIL").ok();
        let password = std::env::var("PETFRIENDS_PASSWORD").ok();
        if let (Some(email), Some(password)) = (email, password) {
            let base_url =
                std::env::var("PETFRIENDS_BASE_URL").unwrap_or_else(|_| default_base_url());
            return Ok(Self {
                base_url,
                email,
                password,
            });
        }

        Self::from_file(Path::new("petfriends.toml"))
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            Error::Config(format!(
                "no credentials: set PETFRIENDS_EMAIL/PETFRIENDS_PASSWORD or provide {}",
                path.display()
            ))
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
