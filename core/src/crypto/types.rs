// ## File: `src/crypto/types.rs`

use std::fmt;

use thiserror::Error;

use crate::utils::to_base64;

/// Stable key length for every primitive in this crate.
pub const KEY_LEN_32: usize = 32;

/// AES block / CBC IV length.
pub const AES_BLOCK_LEN: usize = 16;

/// 16-byte content-cipher identifier as stored in the `CipherID` header field.
///
/// Rendered as base64 in messages and logs, which is how KeePass tooling
/// usually shows it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CipherId(pub [u8; 16]);

impl CipherId {
    pub const fn from_bytes(b: [u8; 16]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        to_base64(&self.0)
    }
}

impl fmt::Debug for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CipherId({})", self.to_base64())
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Cipher id not present in the registry.
    #[error("unsupported cipher: {id}")]
    UnknownCipher { id: String },

    /// Invalid key length provided to a primitive.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Invalid IV / nonce length provided to a primitive.
    #[error("invalid iv length: expected={expected}, actual={actual}")]
    InvalidIvLen { expected: usize, actual: usize },

    /// CBC padding did not validate after decryption.
    #[error("invalid padding after {cipher} decryption")]
    BadPadding { cipher: &'static str },

    /// OS random source failed.
    #[error("random source failure: {0}")]
    Random(String),
}
