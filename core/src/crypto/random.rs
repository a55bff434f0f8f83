//! crypto/random.rs
//! OS-backed randomness for seeds, IVs and keys.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::CryptoError;

/// Fill `buf` from the OS CSPRNG.
pub fn fill_random(buf: &mut [u8]) -> Result<(), CryptoError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CryptoError::Random(e.to_string()))
}

/// Fresh random array.
pub fn random_array<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut out = [0u8; N];
    fill_random(&mut out)?;
    Ok(out)
}
