use tracing::trace;

use crate::buffer::BlockReader;
use crate::crypto::digest::sha256;
use crate::hashed_block::types::{BlockHeader, HashedBlockError, IndexPolicy};

fn read_header(r: &mut BlockReader<'_>) -> Result<BlockHeader, HashedBlockError> {
    let index = r.next_u32_le()?;
    let hash = r.next_array::<32>()?;
    let length = r.next_u32_le()?;
    Ok(BlockHeader { index, hash, length })
}

/// Verify every block digest and return the concatenated block payloads.
///
/// Fails on the first mismatch; nothing is returned on partial success.
/// The terminator must carry an all-zero digest and end the stream.
pub fn decode_hashed_blocks(stream: &[u8], policy: IndexPolicy) -> Result<Vec<u8>, HashedBlockError> {
    let mut r = BlockReader::new(stream);
    let mut out = Vec::with_capacity(stream.len());
    let mut expected: u32 = 0;

    loop {
        let header = read_header(&mut r)?;

        if policy == IndexPolicy::Strict && header.index != expected {
            return Err(HashedBlockError::IndexOutOfOrder { expected, have: header.index });
        }

        if header.is_terminator() {
            if header.hash.iter().any(|&b| b != 0) {
                return Err(HashedBlockError::NonZeroTerminatorHash { index: header.index });
            }
            if r.has_next() {
                return Err(HashedBlockError::TrailingBytes { len: r.remaining() });
            }
            break;
        }

        let data = r.next_buffer(header.length as usize)?;
        if sha256(data) != header.hash {
            return Err(HashedBlockError::HashMismatch { index: header.index });
        }
        trace!(index = header.index, len = data.len(), "hashed block verified");

        out.extend_from_slice(data);
        expected = expected.wrapping_add(1);
    }

    Ok(out)
}
