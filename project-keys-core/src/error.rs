//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use project_keys_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A route could not be turned into a key locator
    #[error("Invalid key route: {0}")]
    InvalidRoute(String),

    /// The page has no loaded key to operate on
    #[error("Key details are not loaded")]
    NotReady,

    /// API error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidRoute(_) | Self::NotReady => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
