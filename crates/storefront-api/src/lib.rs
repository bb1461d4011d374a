//! # Storefront API
//!
//! Preconfigured HTTP clients for the storefront e-commerce backend
//! (`/api/v1`).
//!
//! ## Overview
//!
//! The crate hands out two clients that share one base URL:
//! - **Default client**: base URL only, no extra headers, credential mode
//!   left at the library default
//! - **Private client**: sends `Content-Type: multipart/form-data` and
//!   includes session cookies on every request
//!
//! The base URL comes from the environment instead of being edited into the
//! source per deployment:
//! - `STOREFRONT_API_URL`: explicit base URL
//! - `STOREFRONT_DEPLOYMENT`: named target (`jenkins` or `production`)
//! - `STOREFRONT_TIMEOUT_SECS`: request timeout in seconds
//! - `STOREFRONT_VERIFY_TLS`: `false` disables certificate checks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront_api::{ApiClients, ApiResult};
//!
//! async fn list_products() -> ApiResult<serde_json::Value> {
//!     let clients = ApiClients::from_env()?;
//!     clients.public.get_json("/products").await
//! }
//! ```
//!
//! ### Uploading a form through the private client
//!
//! ```rust,no_run
//! use reqwest::multipart::Form;
//! use storefront_api::{ApiClients, ApiResult};
//!
//! async fn update_avatar(clients: &ApiClients, bytes: Vec<u8>) -> ApiResult<serde_json::Value> {
//!     let form = Form::new()
//!         .text("name", "Jane")
//!         .part("avatar", reqwest::multipart::Part::bytes(bytes).file_name("avatar.png"));
//!     clients.private.put_multipart("/users/profile", form).await
//! }
//! ```

pub mod clients;
pub mod config;
pub mod error;

pub use clients::{ApiClient, ApiClients, ClientOptions, MULTIPART_FORM_DATA};
pub use config::{ApiConfig, ConfigError, Deployment};
pub use error::{ApiError, ApiResult};
