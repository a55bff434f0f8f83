// ## File: `src/config.rs`

//! config.rs
//! Codec configuration.
//!
//! Design notes:
//! - Every field has a default; a JSON file only needs the fields it overrides.
//! - `max_transform_rounds` caps the untrusted header value before the key
//!   derivation loop runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::CompressionMode;
use crate::constants::{DEFAULT_GZIP_LEVEL, DEFAULT_TRANSFORM_ROUNDS};
use crate::hashed_block::IndexPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub default_compression: CompressionMode,
    pub default_transform_rounds: u32,
    pub max_transform_rounds: u32,
    pub gzip_level: u32,
    pub strict_block_index: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_compression: CompressionMode::Gzip,
            default_transform_rounds: DEFAULT_TRANSFORM_ROUNDS,
            max_transform_rounds: u32::MAX,
            gzip_level: DEFAULT_GZIP_LEVEL,
            strict_block_index: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("default transform rounds {rounds} exceed max_transform_rounds {max}")]
    RoundsAboveCap { rounds: u32, max: u32 },

    #[error("gzip level {0} out of range 0..=9")]
    GzipLevel(u32),
}

impl CodecConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_transform_rounds > self.max_transform_rounds {
            return Err(ConfigError::RoundsAboveCap {
                rounds: self.default_transform_rounds,
                max: self.max_transform_rounds,
            });
        }
        if self.gzip_level > 9 {
            return Err(ConfigError::GzipLevel(self.gzip_level));
        }
        Ok(())
    }

    /// Parse and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    pub fn index_policy(&self) -> IndexPolicy {
        if self.strict_block_index {
            IndexPolicy::Strict
        } else {
            IndexPolicy::Lenient
        }
    }
}
