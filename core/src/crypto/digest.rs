//! crypto/digest.rs
//! SHA-256 helpers shared by the key schedule, the hashed-block layer and the
//! header hash.

use sha2::{Digest as _, Sha256};

pub const SHA256_LEN: usize = 32;

#[inline]
pub fn sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    Sha256::digest(data).into()
}

/// SHA-256 over the concatenation of `parts`, without materializing it.
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; SHA256_LEN] {
    let mut h = Sha256::new();
    for p in parts {
        h.update(p);
    }
    h.finalize().into()
}
