//! Generic HTTP client tools
//!
//! Shared request processing for every key endpoint: sending, logging,
//! status classification and JSON parsing.
//!
//! Requests are sent exactly once. Transient failures are reported to the
//! caller as-is; any repeat is the caller's decision.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::{sanitize_body_for_log, truncate_for_log};

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any HTTP status, including errors
    /// * `Err(ApiError::Timeout | ApiError::NetworkError)` - no response received
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {url} -> HTTP {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", sanitize_body_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Turn a non-2xx status into [`ApiError::Http`], keeping the body so
    /// field-level validation messages can be extracted later.
    pub fn ensure_success(status_code: u16, response_text: String) -> Result<String, ApiError> {
        if (200..300).contains(&status_code) {
            return Ok(response_text);
        }

        let error = ApiError::Http {
            status: status_code,
            body: if response_text.is_empty() {
                None
            } else {
                Some(response_text)
            },
        };

        if error.is_expected() {
            log::warn!("API request rejected: {error}");
        } else {
            log::error!("API request failed: {error}");
        }

        Err(error)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!(
                "Raw response: {}",
                truncate_for_log(&sanitize_body_for_log(response_text))
            );
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ensure_success ----

    #[test]
    fn success_statuses_pass_through() {
        for status in [200, 201, 204] {
            let result = HttpUtils::ensure_success(status, "ok".to_string());
            assert_eq!(result, Ok("ok".to_string()));
        }
    }

    #[test]
    fn client_error_keeps_body() {
        let result = HttpUtils::ensure_success(400, r#"{"name":["too long"]}"#.to_string());
        assert!(
            matches!(&result, Err(ApiError::Http { status: 400, body: Some(b) }) if b.contains("too long")),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn empty_error_body_becomes_none() {
        let result = HttpUtils::ensure_success(404, String::new());
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 404,
                body: None
            })
        );
    }

    #[test]
    fn redirect_is_not_success() {
        let result = HttpUtils::ensure_success(302, String::new());
        assert!(matches!(result, Err(ApiError::Http { status: 302, .. })));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
