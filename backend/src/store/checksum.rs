//! Dataset fingerprinting.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw dataset bytes.
///
/// # Returns
/// Hexadecimal string representation of the hash. Clients use it as a
/// dataset version: two loads of the same file yield the same value.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
