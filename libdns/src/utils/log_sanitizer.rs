//! Truncation of vendor payloads before they reach the logs.
//!
//! Response bodies can carry record values (DKIM keys, verification tokens)
//! that should not be dumped wholesale into debug output.

/// Maximum number of bytes kept from a logged payload.
const TRUNCATE_LIMIT: usize = 256;

/// Returns `s` unchanged when short, otherwise its first `TRUNCATE_LIMIT`
/// bytes (cut on a char boundary) followed by the total length.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
