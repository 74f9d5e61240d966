//! Gateway settings loaded from a `bulksms` config file and `BULKSMS_*` environment
//! variables.

use std::fmt;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config as ConfigLoader, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::client::BulkSmsError;
use crate::domain::{GatewayUrl, Password, Username};

const CONFIG_FILE: &str = "bulksms";
const ENV_PREFIX: &str = "BULKSMS";

#[derive(Debug, Clone, Deserialize)]
struct RawGatewayConfig {
    url: String,
    username: String,
    password: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    user_agent: Option<String>,
}

/// Connection settings for the gateway. Read-only once loaded.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub url: GatewayUrl,
    pub username: Username,
    pub password: Password,
    /// Whole-request timeout; the HTTP client default applies when `None`.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl GatewayConfig {
    /// Build settings in code. Only the URL is validated.
    pub fn new(
        url: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, BulkSmsError> {
        Ok(Self {
            url: GatewayUrl::parse(url)?,
            username: Username::new(username),
            password: Password::new(password),
            timeout: None,
            user_agent: None,
        })
    }

    /// Load settings from `./bulksms.{toml,json,yaml,...}` (optional) overlaid with
    /// `BULKSMS_URL`, `BULKSMS_USERNAME`, `BULKSMS_PASSWORD`, `BULKSMS_TIMEOUT_SECS`
    /// and `BULKSMS_USER_AGENT`.
    pub fn load() -> Result<Self, BulkSmsError> {
        Self::from_source(
            ConfigLoader::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(environment()),
        )
    }

    /// Build settings from caller-assembled sources (flat keys `url`, `username`,
    /// `password`, `timeout_secs`, `user_agent`).
    pub fn from_source(builder: ConfigBuilder<DefaultState>) -> Result<Self, BulkSmsError> {
        let raw: RawGatewayConfig = builder.build()?.try_deserialize()?;
        let config = Self {
            url: GatewayUrl::parse(&raw.url)?,
            username: Username::new(raw.username),
            password: Password::new(raw.password),
            timeout: raw.timeout_secs.map(Duration::from_secs),
            user_agent: raw.user_agent.filter(|it| !it.trim().is_empty()),
        };
        tracing::debug!(url = %config.url, "loaded gateway settings");
        Ok(config)
    }

    /// Set the whole-request timeout used by [`crate::BulkSmsClient::from_config`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header used by [`crate::BulkSmsClient::from_config`].
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url.as_str())
            .field("username", &self.username.as_str())
            .field("password", &self.password)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("_")
}
