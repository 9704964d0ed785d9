use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_API_SECRET, ENV_BASE_URL,
    ENV_TIMEOUT, ENV_USER_AGENT, USER_AGENT,
};
use crate::error::AppError;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Authentication credentials for the RelateIQ API.
///
/// Both values are obtained from the integration settings screen of the organization.
/// The secret is never serialized nor printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// API key, sent as the Basic auth username
    pub api_key: String,
    /// API secret, sent as the Basic auth password
    #[serde(skip_serializing, default)]
    pub api_secret: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Returns true when both the key and the secret are set
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the RelateIQ API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the versioned REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first. Missing credentials
    /// are left empty; [`Config::credentials`] reports them.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default(ENV_API_KEY, String::new());
        let api_secret = get_env_or_default(ENV_API_SECRET, String::new());

        if api_key.is_empty() {
            warn!("{ENV_API_KEY} not found in environment variables or .env file");
        }
        if api_secret.is_empty() {
            warn!("{ENV_API_SECRET} not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                api_key,
                api_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(ENV_BASE_URL, DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default(ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS),
                user_agent: get_env_or_default(ENV_USER_AGENT, USER_AGENT.to_string()),
            },
        }
    }

    /// Creates a configuration with the given credentials and default REST settings,
    /// without reading the environment
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
        }
    }

    /// Returns the credentials, or a configuration error naming the missing variables
    pub fn credentials(&self) -> Result<Credentials, AppError> {
        let mut missing = Vec::new();
        if self.credentials.api_key.is_empty() {
            missing.push(ENV_API_KEY);
        }
        if self.credentials.api_secret.is_empty() {
            missing.push(ENV_API_SECRET);
        }
        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing API credentials: set {}",
                missing.join(" and ")
            )));
        }
        Ok(self.credentials.clone())
    }
}
