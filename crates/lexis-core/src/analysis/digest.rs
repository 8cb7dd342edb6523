//! Content digest for record identity.
//!
//! A record's id is the SHA-256 digest of its raw value, so the same string
//! always maps to the same id regardless of when it was analyzed.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Compute the content hash and return it as lowercase hex (64 chars).
pub fn content_hash_hex(value: &str) -> String {
    hex::encode(content_hash(value))
}
