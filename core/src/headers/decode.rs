// ## File: `src/headers/decode.rs`

//! headers/decode.rs
//! Parse and validate the TLV header.
//!
//! Design notes:
//! - Signature and version are checked before any field is read; input too
//!   short to hold them is a format error, not a malformed header.
//! - Every fixed-length field is length-checked, algorithm ids are resolved
//!   against the registries, so a decoded `ContainerOptions` is always usable.
//! - Duplicate fields: the last occurrence wins.

use tracing::{debug, warn};

use crate::buffer::BlockReader;
use crate::compression::CompressionMode;
use crate::constants::*;
use crate::crypto::cipher;
use crate::crypto::types::CipherId;
use crate::headers::types::{ContainerOptions, HeaderError, HeaderFieldId};
use crate::utils::fmt_bytes;

/// Fields collected while walking the TLV list.
#[derive(Default)]
struct Partial {
    cipher: Option<CipherId>,
    compression: Option<CompressionMode>,
    transform_rounds: Option<u32>,
    master_seed: Option<[u8; SEED_LEN]>,
    transform_seed: Option<[u8; SEED_LEN]>,
    encryption_iv: Option<[u8; IV_LEN]>,
    protected_stream_key: Option<[u8; PROTECTED_STREAM_KEY_LEN]>,
    stream_start_bytes: Option<[u8; STREAM_START_BYTES_LEN]>,
    inner_stream: Option<u32>,
}

fn require<T>(v: Option<T>, field: HeaderFieldId) -> Result<T, HeaderError> {
    v.ok_or(HeaderError::MissingField { field })
}

impl Partial {
    fn finish(self) -> Result<ContainerOptions, HeaderError> {
        require(self.inner_stream, HeaderFieldId::InnerRandomStreamId)?;
        Ok(ContainerOptions {
            cipher: require(self.cipher, HeaderFieldId::CipherId)?,
            compression: require(self.compression, HeaderFieldId::CompressionFlags)?,
            transform_rounds: require(self.transform_rounds, HeaderFieldId::TransformRounds)?,
            master_seed: require(self.master_seed, HeaderFieldId::MasterSeed)?,
            transform_seed: require(self.transform_seed, HeaderFieldId::TransformSeed)?,
            encryption_iv: require(self.encryption_iv, HeaderFieldId::EncryptionIv)?,
            protected_stream_key: require(
                self.protected_stream_key,
                HeaderFieldId::ProtectedStreamKey,
            )?,
            stream_start_bytes: require(self.stream_start_bytes, HeaderFieldId::StreamStartBytes)?,
        })
    }
}

fn fixed<const N: usize>(field: HeaderFieldId, payload: &[u8]) -> Result<[u8; N], HeaderError> {
    payload.try_into().map_err(|_| HeaderError::InvalidFieldLength {
        field,
        have: payload.len(),
        need: N,
    })
}

fn check_preamble(r: &mut BlockReader<'_>) -> Result<(), HeaderError> {
    if r.remaining() < PREAMBLE_LEN {
        return Err(HeaderError::TruncatedPreamble { have: r.remaining() });
    }
    let sig1: [u8; 4] = r.next_array()?;
    if sig1 != FILE_SIGNATURE_1 {
        return Err(HeaderError::InvalidSignature { which: 1, have: sig1 });
    }
    let sig2: [u8; 4] = r.next_array()?;
    if sig2 != FILE_SIGNATURE_2 {
        return Err(HeaderError::InvalidSignature { which: 2, have: sig2 });
    }

    let version = r.next_u32_le()?;
    let major = (version >> 16) as u16;
    let minor = (version & 0xFFFF) as u16;
    if major != FILE_VERSION_MAJOR {
        return Err(HeaderError::UnsupportedVersion { major, minor });
    }
    if minor > FILE_VERSION_MINOR {
        warn!(major, minor, "container minor version is newer than supported; reading anyway");
    }
    Ok(())
}

/// Decode the header with no cap on transform rounds.
///
/// Returns the options and the number of bytes consumed (start of ciphertext).
pub fn decode_header(buf: &[u8]) -> Result<(ContainerOptions, usize), HeaderError> {
    decode_header_with_limit(buf, u32::MAX)
}

/// Decode the header, rejecting transform rounds above `max_rounds`.
pub fn decode_header_with_limit(
    buf: &[u8],
    max_rounds: u32,
) -> Result<(ContainerOptions, usize), HeaderError> {
    let mut r = BlockReader::new(buf);
    check_preamble(&mut r)?;

    let mut p = Partial::default();
    loop {
        let raw_id = r.next_u8()?;
        let len = r.next_u16_le()? as usize;
        let payload = r.next_buffer(len)?;

        let id = match HeaderFieldId::try_from(raw_id) {
            Ok(id) => id,
            Err(_) => {
                warn!(raw_id, len, "skipping unknown header field");
                continue;
            }
        };

        match id {
            HeaderFieldId::EndOfHeader => break,
            HeaderFieldId::Comment => {
                debug!(comment = %fmt_bytes(payload), "header comment");
            }
            HeaderFieldId::CipherId => {
                let id = CipherId::from_bytes(fixed(id, payload)?);
                if !cipher::is_supported(&id) {
                    return Err(HeaderError::UnknownCipher { id: id.to_base64() });
                }
                p.cipher = Some(id);
            }
            HeaderFieldId::CompressionFlags => {
                let raw = u32::from_le_bytes(fixed(id, payload)?);
                let mode = CompressionMode::try_from(raw)
                    .map_err(|_| HeaderError::UnknownCompression { raw })?;
                p.compression = Some(mode);
            }
            HeaderFieldId::MasterSeed => p.master_seed = Some(fixed(id, payload)?),
            HeaderFieldId::TransformSeed => p.transform_seed = Some(fixed(id, payload)?),
            HeaderFieldId::TransformRounds => {
                let raw = u64::from_le_bytes(fixed(id, payload)?);
                let high = (raw >> 32) as u32;
                if high != 0 {
                    return Err(HeaderError::TransformRoundsTooLarge { high });
                }
                let rounds = raw as u32;
                if rounds > max_rounds {
                    return Err(HeaderError::RoundsExceedLimit { rounds, max: max_rounds });
                }
                p.transform_rounds = Some(rounds);
            }
            HeaderFieldId::EncryptionIv => p.encryption_iv = Some(fixed(id, payload)?),
            HeaderFieldId::ProtectedStreamKey => {
                p.protected_stream_key = Some(fixed(id, payload)?)
            }
            HeaderFieldId::StreamStartBytes => p.stream_start_bytes = Some(fixed(id, payload)?),
            HeaderFieldId::InnerRandomStreamId => {
                let raw = u32::from_le_bytes(fixed(id, payload)?);
                if raw != inner_stream_ids::SALSA20 {
                    return Err(HeaderError::UnsupportedInnerStream { raw });
                }
                p.inner_stream = Some(raw);
            }
        }
    }

    let consumed = r.position();
    let opts = p.finish()?;
    debug!(
        consumed,
        cipher = %opts.cipher,
        compression = opts.compression.name(),
        rounds = opts.transform_rounds,
        "decoded container header"
    );
    Ok((opts, consumed))
}
