// ## File: `src/pipeline/writer.rs`

//! pipeline/writer.rs
//! Document tree → container bytes.
//!
//! Design notes:
//! - Options are built fresh for every write (new seeds, IV, stream key, start bytes).
//! - The header is encoded first so its hash can be embedded in `Meta/HeaderHash`;
//!   a `Meta/HeaderHash` already in the caller's tree is replaced, never packed.
//! - The master key and the serialized plaintext are zeroized when dropped.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::compression;
use crate::config::CodecConfig;
use crate::crypto::digest::sha256;
use crate::crypto::kdf::derive_master_key;
use crate::document::{
    pack, set_header_hash, without_header_hash, DocumentFormat, JsonFormat, Node,
};
use crate::hashed_block::encode_hashed_blocks;
use crate::headers::encode_header;
use crate::keys::CompositeKey;
use crate::pipeline::types::OptionsOverrides;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::ContainerError;
use crate::utils::to_base64;

pub struct Writer {
    config: CodecConfig,
    format: Box<dyn DocumentFormat>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl Writer {
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

    pub fn write(
        &self,
        doc: &Node,
        key: &CompositeKey,
        overrides: Option<&OptionsOverrides>,
    ) -> Result<Vec<u8>, ContainerError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        self.write_inner(doc, key, overrides, &mut counters, &mut timer)
    }

    pub fn write_with_telemetry(
        &self,
        doc: &Node,
        key: &CompositeKey,
        overrides: Option<&OptionsOverrides>,
    ) -> Result<(Vec<u8>, TelemetrySnapshot), ContainerError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        let out = self.write_inner(doc, key, overrides, &mut counters, &mut timer)?;
        timer.finish();
        Ok((out, TelemetrySnapshot::from(&counters, &timer)))
    }

    fn write_inner(
        &self,
        doc: &Node,
        key: &CompositeKey,
        overrides: Option<&OptionsOverrides>,
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<Vec<u8>, ContainerError> {
        if key.is_empty() {
            return Err(ContainerError::NoCredentials);
        }

        // 1) Options + header
        let defaults = OptionsOverrides::default();
        let opts = overrides.unwrap_or(&defaults).build(&self.config)?;
        let header = timer.time(Stage::Header, || encode_header(&opts));
        let header_hash = to_base64(&sha256(&header));
        counters.add_header(header.len());
        counters.transform_rounds = opts.transform_rounds as u64;
        debug!(header_len = header.len(), ?opts, "built container header");

        // 2) Pack protected values with a fresh inner stream, embed header hash
        let doc = without_header_hash(doc);
        let mut packed = timer.time(Stage::Pack, || {
            let mut stream = opts.inner_stream();
            pack(&doc, &mut stream)
        });
        set_header_hash(&mut packed, &header_hash);
        counters.protected_values = doc.protected_count() as u64;

        // 3) Serialize + compress
        let serialized =
            Zeroizing::new(timer.time(Stage::Serialize, || self.format.serialize(&packed))?);
        let compressed = Zeroizing::new(timer.time(Stage::Compress, || {
            compression::compress(opts.compression, Some(self.config.gzip_level), &serialized)
        })?);
        counters.add_document(serialized.len(), compressed.len());
        debug!(
            document = serialized.len(),
            compressed = compressed.len(),
            mode = opts.compression.name(),
            "document serialized"
        );

        // 4) Hashed blocks behind the stream start bytes
        let payload = timer.time(Stage::Chunk, || {
            let hashed = encode_hashed_blocks(&compressed);
            let mut payload = Zeroizing::new(Vec::with_capacity(
                opts.stream_start_bytes.len() + hashed.len(),
            ));
            payload.extend_from_slice(&opts.stream_start_bytes);
            payload.extend_from_slice(&hashed);
            payload
        });
        let blocks = compressed.len().div_ceil(crate::constants::HASHED_BLOCK_SIZE);
        counters.add_hashed(payload.len(), blocks);

        // 5) Master key + outer cipher
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
        let ciphertext = timer.time(Stage::Encrypt, || {
            cipher.encrypt(&payload, master_key.as_slice(), &opts.encryption_iv)
        })?;
        counters.add_ciphertext(ciphertext.len());

        let mut out = header;
        out.extend_from_slice(&ciphertext);

        info!(
            bytes = out.len(),
            cipher = cipher.name(),
            compression = opts.compression.name(),
            rounds = opts.transform_rounds,
            "container written"
        );
        Ok(out)
    }
}
