//! Log sanitization utilities
//!
//! Keeps key secrets and secret DSNs out of debug/error logs, and keeps
//! oversized bodies from flooding them.

use serde_json::Value;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters kept visible by [`mask_secret`].
const MASK_VISIBLE_PREFIX: usize = 4;

/// JSON object keys whose string values are masked in logged bodies.
const SECRET_FIELDS: &[&str] = &["secret"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping only a short prefix for correlation.
pub fn mask_secret(s: &str) -> String {
    if s.chars().count() <= MASK_VISIBLE_PREFIX * 2 {
        return "****".to_string();
    }
    let prefix: String = s.chars().take(MASK_VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}

/// Prepare a response body for logging: mask every `secret` field of a JSON
/// body (at any depth), then truncate. Non-JSON bodies are only truncated.
pub fn sanitize_body_for_log(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(mut value) => {
            mask_secret_fields(&mut value);
            truncate_for_log(&value.to_string())
        }
        Err(_) => truncate_for_log(body),
    }
}

fn mask_secret_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if SECRET_FIELDS.contains(&key.as_str()) {
                    if let Value::String(s) = child {
                        *s = mask_secret(s);
                        continue;
                    }
                }
                mask_secret_fields(child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_secret_fields),
        _ => {}
    }
}
