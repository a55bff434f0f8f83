use tracing::trace;

use crate::buffer::BlockWriter;
use crate::constants::HASHED_BLOCK_SIZE;
use crate::crypto::digest::sha256;
use crate::hashed_block::types::BlockHeader;

/// Chunk `payload` into 1 MiB hashed blocks followed by the terminator record.
pub fn encode_hashed_blocks(payload: &[u8]) -> Vec<u8> {
    encode_hashed_blocks_with_size(payload, HASHED_BLOCK_SIZE)
}

/// Same as `encode_hashed_blocks` with an explicit block size (`0` means default).
///
/// An empty payload produces only the terminator.
pub fn encode_hashed_blocks_with_size(payload: &[u8], block_size: usize) -> Vec<u8> {
    let block_size = if block_size == 0 { HASHED_BLOCK_SIZE } else { block_size };
    let blocks = payload.len().div_ceil(block_size);
    let mut w = BlockWriter::with_capacity(payload.len() + (blocks + 1) * BlockHeader::LEN);

    let mut index: u32 = 0;
    for chunk in payload.chunks(block_size) {
        let header = BlockHeader { index, hash: sha256(chunk), length: chunk.len() as u32 };
        write_header(&mut w, &header);
        w.put_bytes(chunk);
        trace!(index, len = chunk.len(), "hashed block written");
        index = index.wrapping_add(1);
    }

    write_header(&mut w, &BlockHeader::terminator(index));
    w.into_inner()
}

fn write_header(w: &mut BlockWriter, h: &BlockHeader) {
    w.put_u32_le(h.index).put_bytes(&h.hash).put_u32_le(h.length);
}
