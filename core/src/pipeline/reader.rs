// ## File: `src/pipeline/reader.rs`

//! pipeline/reader.rs
//! Container bytes → document tree.
//!
//! Design notes:
//! - Header parsing is strict and bounded by `max_transform_rounds` before any
//!   key derivation runs.
//! - Stream start bytes are checked before the hashed blocks are walked.
//! - `Meta/HeaderHash`, when present, must match the raw header bytes; it is
//!   removed from the returned tree.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::compression;
use crate::config::CodecConfig;
use crate::constants::STREAM_START_BYTES_LEN;
use crate::crypto::digest::sha256;
use crate::crypto::kdf::derive_master_key;
use crate::document::{take_header_hash, unpack, DocumentFormat, JsonFormat, Node};
use crate::hashed_block::decode_hashed_blocks;
use crate::headers::{decode_header_with_limit, ContainerOptions};
use crate::keys::CompositeKey;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{ContainerError, IntegrityError};
use crate::utils::to_base64;

pub struct Reader {
    config: CodecConfig,
    format: Box<dyn DocumentFormat>,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl Reader {
    pub fn new(config: CodecConfig) -> Self {
        Self { config, format: Box::new(JsonFormat::default()) }
    }

    pub fn with_format(mut self, format: impl DocumentFormat + 'static) -> Self {
        self.format = Box::new(format);
        self
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn read(&self, bytes: &[u8], key: &CompositeKey) -> Result<Node, ContainerError> {
        self.read_with_options(bytes, key).map(|(doc, _)| doc)
    }

    /// Read and also return the parsed header options (see `OptionsOverrides::carry_over`).
    pub fn read_with_options(
        &self,
        bytes: &[u8],
        key: &CompositeKey,
    ) -> Result<(Node, ContainerOptions), ContainerError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        self.read_inner(bytes, key, &mut counters, &mut timer)
    }

    pub fn read_with_telemetry(
        &self,
        bytes: &[u8],
        key: &CompositeKey,
    ) -> Result<(Node, TelemetrySnapshot), ContainerError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        let (doc, _) = self.read_inner(bytes, key, &mut counters, &mut timer)?;
        timer.finish();
        Ok((doc, TelemetrySnapshot::from(&counters, &timer)))
    }

    fn read_inner(
        &self,
        bytes: &[u8],
        key: &CompositeKey,
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<(Node, ContainerOptions), ContainerError> {
        // 1) Header
        let (opts, header_len) = timer.time(Stage::Header, || {
            decode_header_with_limit(bytes, self.config.max_transform_rounds)
        })?;
        let (header, ciphertext) = bytes.split_at(header_len);
        counters.add_header(header_len);
        counters.transform_rounds = opts.transform_rounds as u64;

        if key.is_empty() {
            return Err(ContainerError::NoCredentials);
        }

        // 2) Master key + outer cipher
        let cipher = opts.content_cipher()?;
        let composite = timer.time(Stage::Credentials, || key.hash())?;
        let master_key = timer.time(Stage::DeriveKey, || {
            derive_master_key(
                composite.as_slice(),
                &opts.master_seed,
                &opts.transform_seed,
                opts.transform_rounds as u64,
            )
        })?;
        let plaintext = Zeroizing::new(timer.time(Stage::Decrypt, || {
            cipher.decrypt(ciphertext, master_key.as_slice(), &opts.encryption_iv)
        })?);
        counters.add_ciphertext(ciphertext.len());
        debug!(ciphertext = ciphertext.len(), plaintext = plaintext.len(), "payload decrypted");

        // 3) Stream start bytes
        let start_ok = timer.time(Stage::Verify, || {
            plaintext.len() >= STREAM_START_BYTES_LEN
                && plaintext[..STREAM_START_BYTES_LEN] == opts.stream_start_bytes
        });
        if !start_ok {
            return Err(IntegrityError::StreamStartMismatch.into());
        }

        // 4) Hashed blocks + decompression
        let hashed = &plaintext[STREAM_START_BYTES_LEN..];
        let compressed = Zeroizing::new(timer.time(Stage::Dechunk, || {
            decode_hashed_blocks(hashed, self.config.index_policy())
        })?);
        counters.add_hashed(
            plaintext.len(),
            compressed.len().div_ceil(crate::constants::HASHED_BLOCK_SIZE),
        );
        let serialized = Zeroizing::new(timer.time(Stage::Decompress, || {
            compression::decompress(opts.compression, &compressed)
        })?);
        counters.add_document(serialized.len(), compressed.len());

        // 5) Parse, header hash, unpack
        let mut packed = timer.time(Stage::Parse, || self.format.parse(&serialized))?;
        if let Some(stored) = take_header_hash(&mut packed) {
            if stored.trim() != to_base64(&sha256(header)) {
                return Err(IntegrityError::HeaderHashMismatch.into());
            }
        }
        let doc = timer.time(Stage::Unpack, || {
            let mut stream = opts.inner_stream();
            unpack(packed, &mut stream)
        })?;
        counters.protected_values = doc.protected_count() as u64;

        info!(
            bytes = bytes.len(),
            cipher = cipher.name(),
            compression = opts.compression.name(),
            rounds = opts.transform_rounds,
            "container read"
        );
        Ok((doc, opts))
    }
}
