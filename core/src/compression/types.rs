//! compression/types.rs
//! Stable mode ids, the codec traits and their error type.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::enum_name_or_hex;

/// Wire values of the `CompressionFlags` header field.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    None = 0,
    Gzip = 1,
}

impl CompressionMode {
    pub fn verify(raw: u32) -> Result<Self, CompressionError> {
        CompressionMode::try_from(raw).map_err(|_| CompressionError::UnsupportedMode { raw })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompressionMode::None => "none",
            CompressionMode::Gzip => "gzip",
        }
    }
}

impl Default for CompressionMode {
    fn default() -> Self {
        CompressionMode::Gzip
    }
}

fn mode_name(raw: &u32) -> String {
    enum_name_or_hex::<CompressionMode>(*raw)
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unsupported compression mode: {}", mode_name(.raw))]
    UnsupportedMode { raw: u32 },

    #[error("{codec} compress failed: {msg}")]
    Compress { codec: &'static str, msg: String },

    #[error("{codec} decompress failed: {msg}")]
    Decompress { codec: &'static str, msg: String },
}

pub trait Compressor: Send {
    /// Compress all of `input`, appending to `out`.
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Decompress all of `input`, appending to `out`.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
