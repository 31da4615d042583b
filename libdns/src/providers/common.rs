//! Helpers shared by the provider adapters.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::types::{Record, is_apex_ns};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 used by both the ACS3 and TC3 signing schemes.
pub(crate) fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Drops the apex NS record from a vendor listing.
pub(crate) fn without_apex_ns(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| !is_apex_ns(&r.name, &r.record_type))
        .collect()
}
