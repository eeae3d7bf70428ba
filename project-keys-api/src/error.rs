use serde::{Deserialize, Serialize};

use crate::types::FieldErrors;
use crate::utils::log_sanitizer::truncate_for_log;

/// Unified error type for every key API operation.
///
/// All variants are serializable so front-ends can forward them as structured
/// error reports. Nothing in this crate retries on error; retrying is always a
/// deliberate, user-initiated repeat of the same call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, if one was sent.
        body: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（校验失败、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Http { status, .. } if (400..500).contains(status))
    }

    /// HTTP status code, for `Http` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level validation messages carried by an `Http` error body.
    ///
    /// Returns an empty map for every other variant, and for bodies that are
    /// missing, not JSON, or not a JSON object.
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Http {
                body: Some(body), ..
            } => FieldErrors::from_response_body(body),
            _ => FieldErrors::default(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Http { status, body } => match body {
                Some(body) if !body.is_empty() => {
                    write!(f, "HTTP {status}: {}", truncate_for_log(body))
                }
                _ => write!(f, "HTTP {status}"),
            },
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_http_without_body() {
        let e = ApiError::Http {
            status: 404,
            body: None,
        };
        assert_eq!(e.to_string(), "HTTP 404");
    }

    #[test]
    fn display_http_with_body() {
        let e = ApiError::Http {
            status: 400,
            body: Some(r#"{"name":["too long"]}"#.to_string()),
        };
        assert_eq!(e.to_string(), r#"HTTP 400: {"name":["too long"]}"#);
    }

    #[test]
    fn client_errors_are_expected() {
        for status in [400, 403, 404, 409] {
            let e = ApiError::Http { status, body: None };
            assert!(e.is_expected(), "{status} should be expected");
        }
    }

    #[test]
    fn server_and_transport_errors_are_unexpected() {
        let server = ApiError::Http {
            status: 500,
            body: None,
        };
        let timeout = ApiError::Timeout {
            detail: "30s".to_string(),
        };
        assert!(!server.is_expected());
        assert!(!timeout.is_expected());
    }

    #[test]
    fn field_errors_from_http_body() {
        let e = ApiError::Http {
            status: 400,
            body: Some(r#"{"name":["too long"],"isActive":"bad"}"#.to_string()),
        };
        let errors = e.field_errors();
        assert_eq!(errors.get("name"), Some("too long"));
        assert_eq!(errors.get("isActive"), Some("bad"));
    }

    #[test]
    fn field_errors_empty_for_other_variants() {
        let e = ApiError::NetworkError {
            detail: "down".to_string(),
        };
        assert!(e.field_errors().is_empty());

        let no_body = ApiError::Http {
            status: 400,
            body: None,
        };
        assert!(no_body.field_errors().is_empty());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ApiError::Http {
            status: 403,
            body: None,
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "Http");
        assert_eq!(json["status"], 403);
    }
}
