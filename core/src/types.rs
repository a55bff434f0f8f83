// ## File: `src/types.rs`

//! types.rs
//! Unified container error.
//!
//! - One variant per failure class a caller acts on differently.
//! - Ergonomic `From<T>` impls enable `?` across the pipeline.
//! - Messages name the stage and field, never key material.

use std::fmt;

use crate::compression::CompressionError;
use crate::crypto::CryptoError;
use crate::document::DocumentError;
use crate::hashed_block::HashedBlockError;
use crate::headers::HeaderError;
use crate::keys::KeyError;

/// Integrity failures after decryption.
#[derive(Debug)]
pub enum IntegrityError {
    /// Decrypted prefix differs from the header's stream start bytes
    /// (almost always wrong credentials).
    StreamStartMismatch,

    /// `Meta/HeaderHash` does not match the header bytes.
    HeaderHashMismatch,

    /// Hashed-block layer rejected the payload.
    Block(HashedBlockError),
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::StreamStartMismatch => {
                write!(f, "stream start bytes mismatch (wrong credentials or corrupt container)")
            }
            IntegrityError::HeaderHashMismatch => write!(f, "header hash mismatch"),
            IntegrityError::Block(e) => write!(f, "container payload is corrupt: {}", e),
        }
    }
}

impl std::error::Error for IntegrityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntegrityError::Block(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ContainerError {
    /// Not this format: bad signature or unsupported major version.
    Format(HeaderError),

    /// Header present but invalid (field length, unknown ids, rounds).
    MalformedHeader(HeaderError),

    /// Composite key has no credential sources.
    NoCredentials,

    /// A credential source could not be read.
    Credential(KeyError),

    /// Cipher failure (unknown id, bad padding, key/IV length, randomness).
    Cipher(CryptoError),

    Integrity(IntegrityError),

    Compression(CompressionError),

    Document(DocumentError),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::Format(e) => write!(f, "format error: {}", e),
            ContainerError::MalformedHeader(e) => write!(f, "malformed header: {}", e),
            ContainerError::NoCredentials => write!(f, "no credentials supplied"),
            ContainerError::Credential(e) => write!(f, "credential error: {}", e),
            ContainerError::Cipher(e) => write!(f, "cipher error: {}", e),
            ContainerError::Integrity(e) => write!(f, "integrity error: {}", e),
            ContainerError::Compression(e) => write!(f, "compression error: {}", e),
            ContainerError::Document(e) => write!(f, "document error: {}", e),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContainerError::Format(e) | ContainerError::MalformedHeader(e) => Some(e),
            ContainerError::NoCredentials => None,
            ContainerError::Credential(e) => Some(e),
            ContainerError::Cipher(e) => Some(e),
            ContainerError::Integrity(e) => Some(e),
            ContainerError::Compression(e) => Some(e),
            ContainerError::Document(e) => Some(e),
        }
    }
}

impl ContainerError {
    pub fn is_integrity(&self) -> bool {
        matches!(self, ContainerError::Integrity(_))
    }

    /// Failures a wrong password or key file can produce.
    pub fn is_credential_mismatch(&self) -> bool {
        matches!(
            self,
            ContainerError::Integrity(_) | ContainerError::Cipher(CryptoError::BadPadding { .. })
        )
    }
}

impl From<HeaderError> for ContainerError {
    fn from(e: HeaderError) -> Self {
        if e.is_format_error() {
            ContainerError::Format(e)
        } else {
            ContainerError::MalformedHeader(e)
        }
    }
}

impl From<KeyError> for ContainerError {
    fn from(e: KeyError) -> Self {
        match e {
            KeyError::NoCredentials => ContainerError::NoCredentials,
            KeyError::Crypto(c) => ContainerError::Cipher(c),
            other => ContainerError::Credential(other),
        }
    }
}

impl From<CryptoError> for ContainerError {
    fn from(e: CryptoError) -> Self {
        ContainerError::Cipher(e)
    }
}

impl From<IntegrityError> for ContainerError {
    fn from(e: IntegrityError) -> Self {
        ContainerError::Integrity(e)
    }
}

impl From<HashedBlockError> for ContainerError {
    fn from(e: HashedBlockError) -> Self {
        ContainerError::Integrity(IntegrityError::Block(e))
    }
}

impl From<CompressionError> for ContainerError {
    fn from(e: CompressionError) -> Self {
        ContainerError::Compression(e)
    }
}

impl From<DocumentError> for ContainerError {
    fn from(e: DocumentError) -> Self {
        ContainerError::Document(e)
    }
}
