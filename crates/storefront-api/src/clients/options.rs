//! Client configuration record.
//!
//! A `ClientOptions` value fully describes one client: where it points, which
//! headers it sends by default and whether it forwards session credentials.

use std::collections::BTreeMap;
use std::time::Duration;

/// Content type sent by default from the private client.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Options for building an [`ApiClient`](super::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Root address prepended to every relative request path, kept verbatim.
    pub base_url: String,

    /// Headers included in every request unless the request overrides them.
    pub default_headers: BTreeMap<String, String>,

    /// Credential mode. `None` leaves the HTTP library default in place.
    pub with_credentials: Option<bool>,

    /// Whole-request timeout.
    pub timeout: Option<Duration>,

    /// Whether to verify TLS certificates (disable only for testing).
    pub verify_tls: bool,
}

impl ClientOptions {
    /// Options for the default client: base URL only.
    pub fn public(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: BTreeMap::new(),
            with_credentials: None,
            timeout: None,
            verify_tls: true,
        }
    }

    /// Options for the private client.
    ///
    /// Sends `Content-Type: multipart/form-data` by default and includes
    /// session cookies on every request.
    pub fn private(base_url: impl Into<String>) -> Self {
        Self::public(base_url)
            .with_header("Content-Type", MULTIPART_FORM_DATA)
            .with_credentials(true)
    }

    /// Add or replace a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Set the credential mode.
    pub fn with_credentials(mut self, with_credentials: bool) -> Self {
        self.with_credentials = Some(with_credentials);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Look up a default header, ignoring case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.default_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_URL: &str = "http://13.202.92.158:4000/api/v1";

    #[test]
    fn test_public_options() {
        let options = ClientOptions::public(BASE_URL);
        assert_eq!(options.base_url, BASE_URL);
        assert!(options.default_headers.is_empty());
        assert_eq!(options.with_credentials, None);
        assert_eq!(options.timeout, None);
        assert!(options.verify_tls);
    }

    #[test]
    fn test_private_options() {
        let options = ClientOptions::private(BASE_URL);
        assert_eq!(options.base_url, BASE_URL);
        assert_eq!(options.header("content-type"), Some(MULTIPART_FORM_DATA));
        assert_eq!(options.with_credentials, Some(true));
    }

    #[test]
    fn test_private_differs_from_public_only_in_headers_and_credentials() {
        let mut private = ClientOptions::private(BASE_URL);
        private.default_headers.clear();
        private.with_credentials = None;
        assert_eq!(private, ClientOptions::public(BASE_URL));
    }

    #[test]
    fn test_with_header_replaces() {
        let options = ClientOptions::public(BASE_URL)
            .with_header("Accept", "text/plain")
            .with_header("Accept", "application/json");
        assert_eq!(options.default_headers.len(), 1);
        assert_eq!(options.header("ACCEPT"), Some("application/json"));
        assert_eq!(options.header("Content-Type"), None);
    }
}
