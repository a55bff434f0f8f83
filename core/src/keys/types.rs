use thiserror::Error;

use crate::crypto::types::{CryptoError, KEY_LEN_32};

/// Contract every credential factor satisfies.
pub trait CredentialSource: Send + Sync {
    /// 32-byte hash contributed to the composite key.
    fn hash(&self) -> [u8; KEY_LEN_32];

    /// Combination order; lower values are combined first.
    fn priority(&self) -> i32;
}

#[derive(Debug, Error)]
pub enum KeyError {
    /// Composite key has no sources.
    #[error("cannot build composite hash: no credentials were given")]
    NoCredentials,

    /// Key file content could not be interpreted.
    #[error("invalid key file: {0}")]
    InvalidKeyFile(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
