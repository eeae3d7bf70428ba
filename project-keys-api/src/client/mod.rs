//! reqwest-backed implementation of [`KeyApi`](crate::KeyApi)

mod api;
mod http;
mod routes;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::types::SaveRoute;

pub use routes::{key_path, update_path};

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://sentry.io/api/0";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the project key endpoints.
pub struct HttpKeyApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
    pub(crate) save_route: SaveRoute,
}

impl HttpKeyApi {
    /// Client with default timeouts and no authentication.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> HttpKeyApiBuilder {
        HttpKeyApiBuilder {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            save_route: SaveRoute::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn save_route(&self) -> SaveRoute {
        self.save_route
    }
}

/// Builder for [`HttpKeyApi`].
#[derive(Debug, Clone)]
pub struct HttpKeyApiBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    save_route: SaveRoute,
}

impl HttpKeyApiBuilder {
    /// Bearer token sent with every request.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn save_route(mut self, save_route: SaveRoute) -> Self {
        self.save_route = save_route;
        self
    }

    pub fn build(self) -> Result<HttpKeyApi> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(HttpKeyApi {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            token: self.token.filter(|t| !t.is_empty()),
            save_route: self.save_route,
        })
    }
}
