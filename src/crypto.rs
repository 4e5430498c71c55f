//! Hashing primitives for LinkChain

use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest.
pub const HASH_HEX_LEN: usize = 64;

/// Computes the digest of a block's linkage fields.
///
/// The record is `index || timestamp || prev_hash`, where the index is written
/// as base-10 text and every field is preceded by its byte length as a
/// little-endian `u64`, so each record decodes to exactly one set of fields.
/// The result is the lowercase hex encoding of its SHA-256 digest. Block
/// creation and validation both go through this function, so the encoding must
/// never change for an existing chain.
pub fn calculate_hash(index: u64, timestamp: &str, prev_hash: &str) -> String {
    let index = index.to_string();
    let mut hasher = Sha256::new();
    for field in [index.as_str(), timestamp, prev_hash] {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Whether `s` looks like a digest produced by [`calculate_hash`].
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == HASH_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
