//! # project-keys-api
//!
//! Typed client for the project key (DSN credential) endpoints of an
//! error-tracking API.
//!
//! | Operation | Route |
//! |-----------|-------|
//! | [`KeyApi::get_key`] | `GET /projects/{org}/{project}/keys/{key}/` |
//! | [`KeyApi::update_key`] | `PUT /projects/{org}/{project}/` (see [`SaveRoute`]) |
//! | [`KeyApi::delete_key`] | `DELETE /projects/{org}/{project}/keys/{key}/` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use project_keys_api::{EditableFields, HttpKeyApi, KeyApi, KeyLocator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpKeyApi::builder("https://sentry.io/api/0")
//!         .token("your-token")
//!         .build()?;
//!
//!     let key = KeyLocator::new("acme", "web", "3f1c");
//!     let record = api.get_key(&key).await?;
//!     println!("{} active={}", record.name, record.is_active);
//!
//!     let patch = api
//!         .update_key(
//!             &key,
//!             &EditableFields {
//!                 name: record.name.clone(),
//!                 is_active: false,
//!             },
//!         )
//!         .await?;
//!     let updated = record.merged(&patch);
//!     println!("now active={}", updated.is_active);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Requests are never
//! retried automatically. A rejected update carries its field-level messages,
//! available through [`ApiError::field_errors`].

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the HTTP implementation
pub use client::{
    DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS, HttpKeyApi, HttpKeyApiBuilder, key_path,
    update_path,
};

pub use traits::KeyApi;

// Re-export types
pub use types::{
    DsnSet, EditableField, EditableFields, FieldErrors, KeyLocator, KeyPatch, KeyRecord,
    SaveRoute,
};

// Re-export utils module
pub use utils::{datetime, log_sanitizer};
