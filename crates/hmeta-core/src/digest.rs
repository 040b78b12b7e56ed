//! Stable digest used to name resources that advertise no filename.

use sha2::{Digest, Sha256};

/// SHA-256 of `input` as 64 lowercase hex characters.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
