//! crypto/salsa20.rs
//! Salsa20/20 keystream generator.
//!
//! Used twice, with independent instances:
//! - the inner random stream that masks protected values inside the serialized
//!   document (key `SHA256(protected_stream_key)`, fixed nonce);
//! - in-memory obfuscation of protected buffers (process key, per-buffer nonce).
//!
//! The keystream position carries across calls, so consecutive calls behave as
//! one call over the concatenated input.

use ::salsa20::cipher::generic_array::GenericArray;
use ::salsa20::cipher::{KeyIvInit, StreamCipher};
use ::salsa20::Salsa20 as Salsa20Core;

use crate::crypto::types::{CryptoError, KEY_LEN_32};

pub const SALSA20_NONCE_LEN: usize = 8;

/// Keystream state; wiped on drop by the underlying cipher.
pub struct Salsa20 {
    inner: Salsa20Core,
}

impl Salsa20 {
    pub fn new(key: &[u8; KEY_LEN_32], nonce: &[u8; SALSA20_NONCE_LEN]) -> Self {
        let inner = Salsa20Core::new(GenericArray::from_slice(key), GenericArray::from_slice(nonce));
        Self { inner }
    }

    /// Length-checked constructor for keys/nonces that arrive as slices.
    pub fn from_slices(key: &[u8], nonce: &[u8]) -> Result<Self, CryptoError> {
        let key: &[u8; KEY_LEN_32] = key.try_into().map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;
        let nonce: &[u8; SALSA20_NONCE_LEN] =
            nonce.try_into().map_err(|_| CryptoError::InvalidIvLen {
                expected: SALSA20_NONCE_LEN,
                actual: nonce.len(),
            })?;
        Ok(Self::new(key, nonce))
    }

    /// XOR the keystream into `data` (encrypt and decrypt are the same call).
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        self.inner.apply_keystream(data);
    }

    /// Overwrite `out` with raw keystream bytes.
    pub fn fill_keystream(&mut self, out: &mut [u8]) {
        out.fill(0);
        self.inner.apply_keystream(out);
    }
}
