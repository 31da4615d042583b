//! Utility modules.

/// Log sanitization so vendor payloads are never logged in full.
pub(crate) mod log_sanitizer;
