// ## File: `src/headers/encode.rs`

//! headers/encode.rs
//! Serialize `ContainerOptions` into the TLV header.
//!
//! Design notes:
//! - Field order is fixed: cipher, compression, seeds, rounds, IV, stream key,
//!   start bytes, inner stream id, end marker.
//! - The header is authenticated later by its SHA-256 in the document's Meta.

use crate::buffer::BlockWriter;
use crate::constants::*;
use crate::headers::types::{ContainerOptions, HeaderFieldId};

fn put_field(w: &mut BlockWriter, id: HeaderFieldId, payload: &[u8]) {
    debug_assert!(payload.len() <= u16::MAX as usize);
    w.put_u8(id as u8)
        .put_u16_le(payload.len() as u16)
        .put_bytes(payload);
}

/// Encode the full header (signatures, version, fields, end marker).
pub fn encode_header(opts: &ContainerOptions) -> Vec<u8> {
    let mut w = BlockWriter::with_capacity(256);
    w.put_bytes(&FILE_SIGNATURE_1)
        .put_bytes(&FILE_SIGNATURE_2)
        .put_bytes(&FILE_VERSION);

    put_field(&mut w, HeaderFieldId::CipherId, opts.cipher.as_bytes());
    put_field(
        &mut w,
        HeaderFieldId::CompressionFlags,
        &(opts.compression as u32).to_le_bytes(),
    );
    put_field(&mut w, HeaderFieldId::MasterSeed, &opts.master_seed);
    put_field(&mut w, HeaderFieldId::TransformSeed, &opts.transform_seed);
    put_field(
        &mut w,
        HeaderFieldId::TransformRounds,
        &(opts.transform_rounds as u64).to_le_bytes(),
    );
    put_field(&mut w, HeaderFieldId::EncryptionIv, &opts.encryption_iv);
    put_field(&mut w, HeaderFieldId::ProtectedStreamKey, &opts.protected_stream_key);
    put_field(&mut w, HeaderFieldId::StreamStartBytes, &opts.stream_start_bytes);
    put_field(
        &mut w,
        HeaderFieldId::InnerRandomStreamId,
        &inner_stream_ids::SALSA20.to_le_bytes(),
    );
    put_field(&mut w, HeaderFieldId::EndOfHeader, &END_OF_HEADER);

    w.into_inner()
}
