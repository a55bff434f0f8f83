// ## File: `src/pipeline/types.rs`

//! pipeline/types.rs
//! Caller overrides for the options of a fresh write.

use std::fmt;

use crate::compression::CompressionMode;
use crate::config::CodecConfig;
use crate::constants::*;
use crate::crypto::cipher::DEFAULT_CIPHER_ID;
use crate::crypto::types::{CipherId, CryptoError};
use crate::headers::ContainerOptions;

/// Fields left `None` take the config default (algorithms) or fresh
/// randomness (seeds, IV, stream key, start bytes).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OptionsOverrides {
    pub cipher: Option<CipherId>,
    pub compression: Option<CompressionMode>,
    pub transform_rounds: Option<u32>,
    pub master_seed: Option<[u8; SEED_LEN]>,
    pub transform_seed: Option<[u8; SEED_LEN]>,
    pub encryption_iv: Option<[u8; IV_LEN]>,
    pub protected_stream_key: Option<[u8; PROTECTED_STREAM_KEY_LEN]>,
    pub stream_start_bytes: Option<[u8; STREAM_START_BYTES_LEN]>,
}

impl OptionsOverrides {
    /// Keep the algorithms and work factor of a previously read container.
    /// Every random field is regenerated.
    pub fn carry_over(previous: &ContainerOptions) -> Self {
        Self {
            cipher: Some(previous.cipher),
            compression: Some(previous.compression),
            transform_rounds: Some(previous.transform_rounds),
            ..Self::default()
        }
    }

    pub fn with_cipher(mut self, cipher: CipherId) -> Self {
        self.cipher = Some(cipher);
        self
    }

    pub fn with_compression(mut self, compression: CompressionMode) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn with_transform_rounds(mut self, rounds: u32) -> Self {
        self.transform_rounds = Some(rounds);
        self
    }

    /// Resolve into concrete options for one write.
    pub fn build(&self, config: &CodecConfig) -> Result<ContainerOptions, CryptoError> {
        let mut opts = ContainerOptions::generate(
            self.cipher.unwrap_or(DEFAULT_CIPHER_ID),
            self.compression.unwrap_or(config.default_compression),
            self.transform_rounds.unwrap_or(config.default_transform_rounds),
        )?;
        if let Some(v) = self.master_seed {
            opts.master_seed = v;
        }
        if let Some(v) = self.transform_seed {
            opts.transform_seed = v;
        }
        if let Some(v) = self.encryption_iv {
            opts.encryption_iv = v;
        }
        if let Some(v) = self.protected_stream_key {
            opts.protected_stream_key = v;
        }
        if let Some(v) = self.stream_start_bytes {
            opts.stream_start_bytes = v;
        }
        Ok(opts)
    }
}

impl fmt::Debug for OptionsOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionsOverrides")
            .field("cipher", &self.cipher)
            .field("compression", &self.compression)
            .field("transform_rounds", &self.transform_rounds)
            .field("master_seed", &self.master_seed.is_some())
            .field("transform_seed", &self.transform_seed.is_some())
            .field("encryption_iv", &self.encryption_iv.is_some())
            .field("protected_stream_key", &self.protected_stream_key.is_some())
            .field("stream_start_bytes", &self.stream_start_bytes.is_some())
            .finish()
    }
}
