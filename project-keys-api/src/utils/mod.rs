//! Utility modules.

/// Date/time serialization helpers for key timestamps.
pub mod datetime;

/// Log sanitization utilities to prevent secret exposure.
pub mod log_sanitizer;
