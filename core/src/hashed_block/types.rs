use thiserror::Error;

use crate::buffer::BufferError;
use crate::crypto::digest::SHA256_LEN;

/// Fixed record header preceding every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub index: u32,
    pub hash: [u8; SHA256_LEN],
    pub length: u32,
}

impl BlockHeader {
    pub const LEN: usize = 4 // index
        + SHA256_LEN         // digest
        + 4;                 // length

    pub fn terminator(index: u32) -> Self {
        Self { index, hash: [0u8; SHA256_LEN], length: 0 }
    }

    #[inline]
    pub fn is_terminator(&self) -> bool {
        self.length == 0
    }
}

/// How strictly record indices are checked on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Index is read but not checked.
    #[default]
    Lenient,
    /// Indices must run 0, 1, 2, ...
    Strict,
}

#[derive(Debug, Error)]
pub enum HashedBlockError {
    #[error("container payload is corrupt: block {index} digest mismatch")]
    HashMismatch { index: u32 },

    #[error("container payload is corrupt: block index {have}, expected {expected}")]
    IndexOutOfOrder { expected: u32, have: u32 },

    #[error("container payload is corrupt: terminator block {index} has a non-zero digest")]
    NonZeroTerminatorHash { index: u32 },

    #[error("container payload is corrupt: {len} bytes after the terminator block")]
    TrailingBytes { len: usize },

    #[error("container payload is truncated: {0}")]
    Truncated(#[from] BufferError),
}
