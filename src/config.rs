//! Application configuration management.
//!
//! Credentials for the Reddit script app are read from the process
//! environment (populated from a `.env` file by the binary). Endpoint base
//! URLs default to Reddit's public hosts and can be overridden, which is how
//! the integration tests point the client at a mock server.

use std::io::{self, Write};

use thiserror::Error;
use tracing::warn;

use crate::utils::mask_secret;

pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
pub const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";
pub const USERNAME_VAR: &str = "REDDIT_USERNAME";
pub const PASSWORD_VAR: &str = "REDDIT_PASSWORD";

pub const AUTH_BASE_URL_VAR: &str = "REDDIT_AUTH_BASE_URL";
pub const API_BASE_URL_VAR: &str = "REDDIT_API_BASE_URL";

/// Host serving the OAuth token endpoint
pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.reddit.com";

/// Host serving authenticated API requests
pub const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";

/// Subreddit used when the prompt is left empty
pub const DEFAULT_SUBREDDIT: &str = "python";

/// Number of newest posts fetched per run
pub const POST_LIMIT: usize = 5;

/// Application part of the user agent sent to Reddit
pub const APP_IDENTIFIER: &str = "script:reddit-post-viewer:v1.0";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing one or more Reddit API credentials. Please check your .env file.")]
    MissingCredentials(Vec<&'static str>),
}

/// The five values a Reddit script app needs for the password grant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// User agent actually sent to Reddit, in the format its API rules ask for.
    pub fn client_user_agent(&self) -> String {
        format!("{} (by /u/{})", APP_IDENTIFIER, self.username)
    }

    /// Echo the loaded values, masking the password.
    pub fn print_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Using credentials:")?;
        writeln!(out, "Client ID: {}", self.client_id)?;
        writeln!(out, "User Agent: {}", self.user_agent)?;
        writeln!(out, "Username: {}", self.username)?;
        writeln!(out, "Password: {}", mask_secret(&self.password))
    }
}

// Secrets stay out of debug output and logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("user_agent", &self.user_agent)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth_base_url: String,
    pub api_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Unset and empty values both count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let required = [
            CLIENT_ID_VAR,
            CLIENT_SECRET_VAR,
            USER_AGENT_VAR,
            USERNAME_VAR,
            PASSWORD_VAR,
        ];
        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            warn!(missing = ?missing, "Required credentials not set");
            return Err(ConfigError::MissingCredentials(missing));
        }

        let credentials = Credentials {
            client_id: get(CLIENT_ID_VAR).unwrap_or_default(),
            client_secret: get(CLIENT_SECRET_VAR).unwrap_or_default(),
            user_agent: get(USER_AGENT_VAR).unwrap_or_default(),
            username: get(USERNAME_VAR).unwrap_or_default(),
            password: get(PASSWORD_VAR).unwrap_or_default(),
        };

        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            auth_base_url: get(AUTH_BASE_URL_VAR).unwrap_or(defaults.auth_base_url),
            api_base_url: get(API_BASE_URL_VAR).unwrap_or(defaults.api_base_url),
        };

        Ok(Self {
            credentials,
            endpoints,
        })
    }
}
