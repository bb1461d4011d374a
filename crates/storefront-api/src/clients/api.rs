//! Storefront backend client.
//!
//! Thin wrapper over a `reqwest::Client` that resolves relative paths against
//! the configured base URL and decodes JSON responses.

use super::options::ClientOptions;
use crate::config::validate_base_url;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, error, instrument, warn};

/// HTTP client bound to one storefront base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client instance.
    client: Client,

    /// Options the client was built from.
    options: ClientOptions,
}

impl ApiClient {
    /// Build a client from its options.
    ///
    /// Fails if the base URL is not an absolute http(s) URL or a default
    /// header cannot be sent over HTTP.
    pub fn new(options: ClientOptions) -> ApiResult<Self> {
        validate_base_url(&options.base_url)?;
        let client = build_http_client(&options)?;

        debug!(
            base_url = %options.base_url,
            headers = options.default_headers.len(),
            with_credentials = ?options.with_credentials,
            "Built storefront client"
        );

        Ok(Self { client, options })
    }

    /// Configured base URL, exactly as supplied.
    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    /// Options the client was built from.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Headers sent on every request.
    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.options.default_headers
    }

    /// Whether session cookies are stored and sent back.
    pub fn sends_credentials(&self) -> bool {
        self.options.with_credentials == Some(true)
    }

    /// Build a full URL by appending a path to the base URL.
    ///
    /// Absolute http(s) URLs are returned unchanged and an empty path yields
    /// the base URL as configured.
    pub fn url(&self, path: &str) -> String {
        if is_absolute_http_url(path) {
            return path.to_string();
        }

        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            return self.options.base_url.clone();
        }

        let base = self.options.base_url.trim_end_matches('/');
        format!("{}/{}", base, relative)
    }

    /// Start a request for a path relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "Preparing storefront request");
        self.client.request(method, url)
    }

    /// Start a GET request.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    /// Start a POST request.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Start a PUT request.
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    /// Start a PATCH request.
    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    /// Start a DELETE request.
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// GET a path and decode the JSON body.
    #[instrument(skip(self), fields(base_url = %self.options.base_url))]
    pub async fn get_json<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(self.get(path)).await
    }

    /// POST a JSON body and decode the JSON response.
    #[instrument(skip(self, body), fields(base_url = %self.options.base_url))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.post(path).json(body)).await
    }

    /// POST a multipart form and decode the JSON response.
    #[instrument(skip(self, form), fields(base_url = %self.options.base_url))]
    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(self.post(path).multipart(form)).await
    }

    /// PUT a multipart form and decode the JSON response.
    #[instrument(skip(self, form), fields(base_url = %self.options.base_url))]
    pub async fn put_multipart<T>(&self, path: &str, form: Form) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(self.put(path).multipart(form)).await
    }

    /// Send a prepared request and decode the JSON body.
    pub async fn send_json<T>(&self, request: RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T>(&self, response: Response) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            error!(url = %response.url(), "Storefront authentication failed");
            return Err(ApiError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(response.url().path().to_string()));
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Storefront API error ({}): {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

fn is_absolute_http_url(path: &str) -> bool {
    Url::parse(path)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn build_http_client(options: &ClientOptions) -> ApiResult<Client> {
    let mut builder = Client::builder();

    let mut headers = HeaderMap::new();
    for (name, value) in &options.default_headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.clone(),
            message: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }
    if !headers.is_empty() {
        builder = builder.default_headers(headers);
    }

    if let Some(with_credentials) = options.with_credentials {
        builder = builder.cookie_store(with_credentials);
    }
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if !options.verify_tls {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(ApiError::ClientBuild)
}
