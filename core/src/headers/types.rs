// ## File: `src/headers/types.rs`

//! headers/types.rs
//! Header field registry, container options and header errors.

use std::fmt;

use num_enum::TryFromPrimitive;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::buffer::BufferError;
use crate::compression::CompressionMode;
use crate::constants::*;
use crate::crypto::cipher::{self, ContentCipher};
use crate::crypto::digest::sha256;
use crate::crypto::random::random_array;
use crate::crypto::salsa20::Salsa20;
use crate::crypto::types::{CipherId, CryptoError};
use crate::utils::fmt_bytes;

/// Header field ids (`u8` on the wire).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum HeaderFieldId {
    EndOfHeader         = 0,
    Comment             = 1,
    CipherId            = 2,
    CompressionFlags    = 3,
    MasterSeed          = 4,
    TransformSeed       = 5,
    TransformRounds     = 6,
    EncryptionIv        = 7,
    ProtectedStreamKey  = 8,
    StreamStartBytes    = 9,
    InnerRandomStreamId = 10,
}

impl HeaderFieldId {
    /// Required payload length, `None` for variable-length fields.
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            HeaderFieldId::EndOfHeader | HeaderFieldId::Comment => None,
            HeaderFieldId::CipherId            => Some(CIPHER_ID_LEN),
            HeaderFieldId::CompressionFlags    => Some(COMPRESSION_FLAGS_LEN),
            HeaderFieldId::MasterSeed          => Some(SEED_LEN),
            HeaderFieldId::TransformSeed       => Some(SEED_LEN),
            HeaderFieldId::TransformRounds     => Some(TRANSFORM_ROUNDS_LEN),
            HeaderFieldId::EncryptionIv        => Some(IV_LEN),
            HeaderFieldId::ProtectedStreamKey  => Some(PROTECTED_STREAM_KEY_LEN),
            HeaderFieldId::StreamStartBytes    => Some(STREAM_START_BYTES_LEN),
            HeaderFieldId::InnerRandomStreamId => Some(INNER_STREAM_ID_LEN),
        }
    }
}

/// Everything the pipeline needs from (or writes into) the header.
///
/// Built with fresh randomness for every write, or decoded strictly from the
/// header bytes on read. Never persisted beyond one operation; seeds and keys
/// are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ContainerOptions {
    #[zeroize(skip)]
    pub cipher: CipherId,
    #[zeroize(skip)]
    pub compression: CompressionMode,
    pub transform_rounds: u32,
    pub master_seed: [u8; SEED_LEN],
    pub transform_seed: [u8; SEED_LEN],
    pub encryption_iv: [u8; IV_LEN],
    pub protected_stream_key: [u8; PROTECTED_STREAM_KEY_LEN],
    pub stream_start_bytes: [u8; STREAM_START_BYTES_LEN],
}

impl ContainerOptions {
    /// Fresh options: caller picks the algorithms, every seed/IV/key is random.
    pub fn generate(
        cipher: CipherId,
        compression: CompressionMode,
        transform_rounds: u32,
    ) -> Result<Self, CryptoError> {
        Ok(Self {
            cipher,
            compression,
            transform_rounds,
            master_seed: random_array()?,
            transform_seed: random_array()?,
            encryption_iv: random_array()?,
            protected_stream_key: random_array()?,
            stream_start_bytes: random_array()?,
        })
    }

    /// Outer cipher implementation for `self.cipher`.
    pub fn content_cipher(&self) -> Result<&'static dyn ContentCipher, CryptoError> {
        cipher::resolve(&self.cipher)
    }

    /// Fresh inner random stream: key `SHA256(protected_stream_key)`, fixed nonce.
    ///
    /// Every call starts at keystream offset 0; pack and unpack must each use
    /// their own instance.
    pub fn inner_stream(&self) -> Salsa20 {
        let mut key = sha256(&self.protected_stream_key);
        let stream = Salsa20::new(&key, &INNER_STREAM_NONCE);
        key.zeroize();
        stream
    }
}

impl fmt::Debug for ContainerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerOptions")
            .field("cipher", &self.cipher)
            .field("compression", &self.compression)
            .field("transform_rounds", &self.transform_rounds)
            .field("master_seed", &hex::encode(self.master_seed))
            .field("transform_seed", &hex::encode(self.transform_seed))
            .field("encryption_iv", &hex::encode(self.encryption_iv))
            .field("protected_stream_key", &"<redacted>")
            .field("stream_start_bytes", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum HeaderError {
    /// Signature mismatch: not a KeePass 2.x container.
    #[error("not a KeePass 2 container: signature {which} is {}", fmt_bytes(.have))]
    InvalidSignature { which: u8, have: [u8; 4] },

    /// Major version differs from the supported one.
    #[error("unsupported file version {major}.{minor} (supported major {})", FILE_VERSION_MAJOR)]
    UnsupportedVersion { major: u16, minor: u16 },

    /// Input shorter than the signatures and version.
    #[error("not a KeePass 2 container: only {have} bytes, need {}", PREAMBLE_LEN)]
    TruncatedPreamble { have: usize },

    /// Header ended before `EndOfHeader`.
    #[error("header truncated: {0}")]
    Truncated(#[from] BufferError),

    #[error("{field:?} field must be {need} bytes, got {have}")]
    InvalidFieldLength { field: HeaderFieldId, have: usize, need: usize },

    #[error("unsupported cipher {id}")]
    UnknownCipher { id: String },

    #[error("unsupported compression id {raw}")]
    UnknownCompression { raw: u32 },

    /// High 32 bits of `TransformRounds` are set.
    #[error("transform rounds field exceeds 32 bits (high word 0x{high:08x})")]
    TransformRoundsTooLarge { high: u32 },

    /// Rounds above the caller's configured cap.
    #[error("transform rounds {rounds} exceed configured limit {max}")]
    RoundsExceedLimit { rounds: u32, max: u32 },

    #[error("unsupported inner random stream id {raw}; only Salsa20 is supported")]
    UnsupportedInnerStream { raw: u32 },

    #[error("required header field {field:?} is missing")]
    MissingField { field: HeaderFieldId },
}

impl HeaderError {
    /// Signature/version problems (the input is not this format at all).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            HeaderError::InvalidSignature { .. }
                | HeaderError::UnsupportedVersion { .. }
                | HeaderError::TruncatedPreamble { .. }
        )
    }
}
