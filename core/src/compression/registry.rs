//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{gzip, none};
use crate::compression::types::{CompressionError, CompressionMode, Compressor, Decompressor};

pub struct CodecInfo {
    pub name: &'static str,
    pub default_level: u32,
}

pub fn resolve(mode: CompressionMode) -> CodecInfo {
    match mode {
        CompressionMode::None => CodecInfo { name: "none", default_level: 0 },
        CompressionMode::Gzip => CodecInfo { name: "gzip", default_level: 6 },
    }
}

pub fn create_compressor(mode: CompressionMode, level: Option<u32>) -> Box<dyn Compressor> {
    match mode {
        CompressionMode::None => Box::new(none::Passthrough),
        CompressionMode::Gzip => Box::new(gzip::GzipCompressor::new(level.unwrap_or(resolve(mode).default_level))),
    }
}

pub fn create_decompressor(mode: CompressionMode) -> Box<dyn Decompressor> {
    match mode {
        CompressionMode::None => Box::new(none::Passthrough),
        CompressionMode::Gzip => Box::new(gzip::GzipDecompressor),
    }
}

/// One-shot helper used by the pipeline.
pub fn compress(mode: CompressionMode, level: Option<u32>, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::with_capacity(input.len() / 2);
    create_compressor(mode, level).compress(input, &mut out)?;
    Ok(out)
}

/// Raw-id entry point: unknown ids fail before any decoding.
pub fn decompress_raw(raw_mode: u32, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress(CompressionMode::verify(raw_mode)?, input)
}

pub fn decompress(mode: CompressionMode, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::with_capacity(input.len().saturating_mul(2));
    create_decompressor(mode).decompress(input, &mut out)?;
    Ok(out)
}
