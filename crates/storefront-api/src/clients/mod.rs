//! HTTP clients for the storefront backend.
//!
//! Two clients share one base URL:
//! - the default (public) client sends no extra headers and leaves the
//!   credential mode unset
//! - the private client sends `Content-Type: multipart/form-data` and keeps a
//!   cookie store so session cookies travel with every request

pub mod api;
pub mod options;

pub use api::ApiClient;
pub use options::{ClientOptions, MULTIPART_FORM_DATA};

use crate::config::ApiConfig;
use crate::error::ApiResult;
use tracing::info;

/// The default and private clients, built from one configuration.
#[derive(Debug, Clone)]
pub struct ApiClients {
    /// Default client: base URL only.
    pub public: ApiClient,

    /// Private client: multipart content type, credentials included.
    pub private: ApiClient,
}

impl ApiClients {
    /// Build both clients from a configuration.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        config.validate()?;

        let public = ApiClient::new(ClientOptions {
            timeout: config.timeout(),
            ..ClientOptions::public(config.base_url.as_str()).with_verify_tls(config.verify_tls)
        })?;
        let private = ApiClient::new(ClientOptions {
            timeout: config.timeout(),
            ..ClientOptions::private(config.base_url.as_str()).with_verify_tls(config.verify_tls)
        })?;

        info!(base_url = %config.base_url, "Storefront clients ready");

        Ok(Self { public, private })
    }

    /// Build both clients from environment variables.
    ///
    /// See [`ApiConfig::from_env`] for the variables read.
    pub fn from_env() -> ApiResult<Self> {
        let config = ApiConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Base URL shared by both clients.
    pub fn base_url(&self) -> &str {
        self.public.base_url()
    }
}
