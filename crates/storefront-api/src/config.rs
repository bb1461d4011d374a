//! Backend configuration for the storefront clients.
//!
//! The base URL is selected at runtime from environment variables instead of
//! being edited into the source per deployment. Known deployment targets are
//! available as presets; an explicit URL always wins over a preset.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding an explicit backend base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Environment variable naming a [`Deployment`] preset.
pub const DEPLOYMENT_ENV: &str = "STOREFRONT_DEPLOYMENT";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_SECS_ENV: &str = "STOREFRONT_TIMEOUT_SECS";

/// Environment variable toggling TLS certificate verification.
pub const VERIFY_TLS_ENV: &str = "STOREFRONT_VERIFY_TLS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },

    /// Deployment name that matches no known target.
    #[error("Unknown deployment: {0}")]
    UnknownDeployment(String),
}

/// Known backend deployment targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Backend deployed by the Jenkins pipeline.
    #[default]
    Jenkins,
    /// Hosted production backend.
    Production,
}

impl Deployment {
    /// All known deployment targets.
    pub const ALL: [Deployment; 2] = [Deployment::Jenkins, Deployment::Production];

    /// Base URL of this deployment's API.
    pub fn base_url(&self) -> &'static str {
        match self {
            Deployment::Jenkins => "http://13.202.92.158:4000/api/v1",
            Deployment::Production => {
                "https://mernecommercebackend-production.up.railway.app/api/v1"
            }
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Deployment::Jenkins => "jenkins",
            Deployment::Production => "production",
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deployment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jenkins" => Ok(Deployment::Jenkins),
            "production" | "prod" => Ok(Deployment::Production),
            _ => Err(ConfigError::UnknownDeployment(s.to_string())),
        }
    }
}

/// Configuration shared by the default and private clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root address prepended to every relative request path.
    pub base_url: String,

    /// Request timeout in seconds. `0` disables the timeout.
    pub timeout_secs: u64,

    /// Whether to verify TLS certificates (disable only for testing).
    pub verify_tls: bool,
}

impl Default for ApiConfig {
    /// Returns the configuration for the default deployment.
    fn default() -> Self {
        Self::for_deployment(Deployment::default())
    }
}

impl ApiConfig {
    /// Configuration pointing at a known deployment target.
    pub fn for_deployment(deployment: Deployment) -> Self {
        Self {
            base_url: deployment.base_url().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verify_tls: true,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STOREFRONT_API_URL`: explicit base URL (takes precedence)
    /// - `STOREFRONT_DEPLOYMENT`: `jenkins` or `production` (default: jenkins)
    /// - `STOREFRONT_TIMEOUT_SECS`: request timeout in seconds, `0` for none (default: 30)
    /// - `STOREFRONT_VERIFY_TLS`: whether to verify TLS (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` is this function applied to the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let deployment = match lookup(DEPLOYMENT_ENV) {
            Some(name) if !name.trim().is_empty() => name.parse()?,
            _ => Deployment::default(),
        };
        let default = Self::for_deployment(deployment);

        Ok(Self {
            base_url: lookup(API_URL_ENV)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(default.base_url),
            timeout_secs: lookup(TIMEOUT_SECS_ENV)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.timeout_secs),
            verify_tls: lookup(VERIFY_TLS_ENV)
                .map(|s| {
                    let s = s.trim();
                    !s.eq_ignore_ascii_case("false") && s != "0"
                })
                .unwrap_or(default.verify_tls),
        })
    }

    /// Get the request timeout, or `None` when it is disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_base_url(API_URL_ENV, &self.base_url)
    }
}

/// Check that `base_url` is an absolute http(s) URL with a host.
pub fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    check_base_url("base_url", base_url)
}

fn check_base_url(key: &str, base_url: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(format!("{}: {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid(format!("{} has no host", base_url)));
    }
    Ok(())
}
