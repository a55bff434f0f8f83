//! crypto/protected.rs
//! In-memory obfuscation of sensitive values.
//!
//! Lifecycle:
//! - `ProcessKey::try_global()` is generated once per process on first use and
//!   is never serialized or logged. If the OS random source fails the error is
//!   surfaced; there is no fallback key.
//! - Every `ProtectedBuffer` takes a fresh nonce from its key's monotonically
//!   increasing counter, so no two buffers under one key share a keystream.
//! - At rest a buffer only holds Salsa20 ciphertext; `reveal` decrypts into a
//!   zeroizing copy.
//!
//! Tests and embedders may build their own `ProcessKey` and pass it to
//! `ProtectedBuffer::with_key` instead of relying on the global one.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use zeroize::{Zeroize, Zeroizing};

use crate::crypto::random::random_array;
use crate::crypto::salsa20::{Salsa20, SALSA20_NONCE_LEN};
use crate::crypto::types::{CryptoError, KEY_LEN_32};

static GLOBAL_KEY: OnceLock<Arc<ProcessKey>> = OnceLock::new();

/// Obfuscation key shared by protected buffers, plus the nonce counter.
pub struct ProcessKey {
    key: [u8; KEY_LEN_32],
    counter: AtomicU64,
}

impl ProcessKey {
    /// Fresh random key with its counter at 1.
    pub fn generate() -> Result<Self, CryptoError> {
        Ok(Self::from_bytes(random_array::<KEY_LEN_32>()?))
    }

    pub fn from_bytes(key: [u8; KEY_LEN_32]) -> Self {
        Self { key, counter: AtomicU64::new(1) }
    }

    /// Process-wide key, created on the first successful call.
    ///
    /// A failure of the OS random source is returned; no key is stored, so a
    /// later call tries again.
    pub fn try_global() -> Result<Arc<ProcessKey>, CryptoError> {
        if let Some(key) = GLOBAL_KEY.get() {
            return Ok(key.clone());
        }
        let fresh = Arc::new(ProcessKey::generate()?);
        Ok(GLOBAL_KEY.get_or_init(|| fresh).clone())
    }

    /// Process-wide key for the infallible constructors.
    ///
    /// # Panics
    ///
    /// If the OS random source fails while the key is first created.
    pub fn global() -> Arc<ProcessKey> {
        match Self::try_global() {
            Ok(key) => key,
            Err(e) => panic!("process key: OS random source unavailable: {e}"),
        }
    }

    /// Next unused nonce for this key.
    fn next_nonce(&self) -> [u8; SALSA20_NONCE_LEN] {
        self.counter.fetch_add(1, Ordering::Relaxed).to_le_bytes()
    }

    fn stream(&self, nonce: &[u8; SALSA20_NONCE_LEN]) -> Salsa20 {
        Salsa20::new(&self.key, nonce)
    }
}

impl Drop for ProcessKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl fmt::Debug for ProcessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessKey").field("key", &"<redacted>").finish()
    }
}

/// Owned sensitive byte sequence, obfuscated while resident in memory.
pub struct ProtectedBuffer {
    key: Arc<ProcessKey>,
    nonce: [u8; SALSA20_NONCE_LEN],
    data: Vec<u8>,
}

impl ProtectedBuffer {
    /// Protect `plain` under the process-wide key.
    ///
    /// # Panics
    ///
    /// See [`ProcessKey::global`].
    pub fn new(plain: &[u8]) -> Self {
        Self::with_key(ProcessKey::global(), plain)
    }

    /// Like [`ProtectedBuffer::new`], returning the error if the process key
    /// cannot be created.
    pub fn try_new(plain: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self::with_key(ProcessKey::try_global()?, plain))
    }

    pub fn with_key(key: Arc<ProcessKey>, plain: &[u8]) -> Self {
        let nonce = key.next_nonce();
        let mut data = plain.to_vec();
        if !data.is_empty() {
            key.stream(&nonce).apply_keystream(&mut data);
        }
        Self { key, nonce, data }
    }

    pub fn from_text(plain: &str) -> Self {
        Self::new(plain.as_bytes())
    }

    /// Decrypted copy, wiped when dropped.
    pub fn reveal(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(self.data.clone());
        if !out.is_empty() {
            self.key.stream(&self.nonce).apply_keystream(&mut out);
        }
        out
    }

    /// Decrypted copy as UTF-8 text (lossy for invalid sequences).
    pub fn reveal_string(&self) -> Zeroizing<String> {
        Zeroizing::new(String::from_utf8_lossy(&self.reveal()).into_owned())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw obfuscated bytes, as held in memory.
    pub fn ciphertext(&self) -> &[u8] {
        &self.data
    }

    pub fn nonce(&self) -> [u8; SALSA20_NONCE_LEN] {
        self.nonce
    }
}

/// Cloning re-protects under a fresh nonce; the copy shares no keystream.
impl Clone for ProtectedBuffer {
    fn clone(&self) -> Self {
        Self::with_key(self.key.clone(), &self.reveal())
    }
}

impl PartialEq for ProtectedBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && *self.reveal() == *other.reveal()
    }
}

impl Eq for ProtectedBuffer {}

impl fmt::Debug for ProtectedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectedBuffer")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl Drop for ProtectedBuffer {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
