// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! Master-key derivation from the composite credential hash.
//!
//! Design:
//! - transformed = AES-256-ECB(key = transform_seed)^rounds (composite_hash), no padding
//! - master_key  = SHA256(master_seed || SHA256(transformed))
//!
//! Notes:
//! - The rounds loop is the deliberately slow step; it has no cancellation hook.
//! - `rounds` comes from an untrusted header field. Callers cap it before getting
//!   here (`CodecConfig::max_transform_rounds`).
//! - `rounds = 0` degenerates to `SHA256(master_seed || SHA256(composite_hash))`.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use zeroize::{Zeroize, Zeroizing};

use crate::constants::SEED_LEN;
use crate::crypto::digest::{sha256, sha256_concat};
use crate::crypto::types::{CryptoError, KEY_LEN_32};

/// Iterated AES-256-ECB over both 16-byte halves of `composite_hash`.
///
/// Errors:
/// - `InvalidKeyLen` if `composite_hash` or `transform_seed` is not 32 bytes.
pub fn transform_key(
    composite_hash: &[u8],
    transform_seed: &[u8],
    rounds: u64,
) -> Result<Zeroizing<[u8; KEY_LEN_32]>, CryptoError> {
    if composite_hash.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: composite_hash.len() });
    }
    if transform_seed.len() != SEED_LEN {
        return Err(CryptoError::InvalidKeyLen { expected: SEED_LEN, actual: transform_seed.len() });
    }

    let cipher = Aes256::new_from_slice(transform_seed)
        .map_err(|_| CryptoError::InvalidKeyLen { expected: SEED_LEN, actual: transform_seed.len() })?;

    let mut blocks = [
        Block::clone_from_slice(&composite_hash[..16]),
        Block::clone_from_slice(&composite_hash[16..]),
    ];
    for _ in 0..rounds {
        cipher.encrypt_blocks(&mut blocks);
    }

    let mut out = Zeroizing::new([0u8; KEY_LEN_32]);
    out[..16].copy_from_slice(&blocks[0]);
    out[16..].copy_from_slice(&blocks[1]);
    for b in blocks.iter_mut() {
        b.as_mut_slice().zeroize();
    }
    Ok(out)
}

/// Final 32-byte key for the outer cipher.
///
/// Returns a zeroizing array; the value lives only for one read or write.
pub fn derive_master_key(
    composite_hash: &[u8],
    master_seed: &[u8],
    transform_seed: &[u8],
    rounds: u64,
) -> Result<Zeroizing<[u8; KEY_LEN_32]>, CryptoError> {
    if master_seed.len() != SEED_LEN {
        return Err(CryptoError::InvalidKeyLen { expected: SEED_LEN, actual: master_seed.len() });
    }

    let transformed = transform_key(composite_hash, transform_seed, rounds)?;
    let stretched = Zeroizing::new(sha256(transformed.as_slice()));
    Ok(Zeroizing::new(sha256_concat(&[master_seed, stretched.as_slice()])))
}
