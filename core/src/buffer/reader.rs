//! buffer/reader.rs
//!
//! Forward-only reader used by the header codec and the hashed-block decoder.

use byteorder::{ByteOrder, LittleEndian};

use crate::buffer::types::BufferError;

/// Cursor over a borrowed byte slice.
///
/// Every successful read advances the cursor by exactly the number of bytes
/// returned. A failed read leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct BlockReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BlockReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Next `n` bytes.
    pub fn next_buffer(&mut self, n: usize) -> Result<&'a [u8], BufferError> {
        if n > self.remaining() {
            return Err(BufferError::OutOfBounds {
                offset: self.pos,
                requested: n,
                available: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Everything after the cursor (possibly empty).
    pub fn next_remaining(&mut self) -> &'a [u8] {
        let out = &self.buf[self.pos..];
        self.pos = self.buf.len();
        out
    }

    /// Next `N` bytes copied into an array.
    pub fn next_array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.next_buffer(N)?);
        Ok(out)
    }

    pub fn next_u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.next_buffer(1)?[0])
    }

    pub fn next_u16_le(&mut self) -> Result<u16, BufferError> {
        Ok(LittleEndian::read_u16(self.next_buffer(2)?))
    }

    pub fn next_u32_le(&mut self) -> Result<u32, BufferError> {
        Ok(LittleEndian::read_u32(self.next_buffer(4)?))
    }

    pub fn next_u64_le(&mut self) -> Result<u64, BufferError> {
        Ok(LittleEndian::read_u64(self.next_buffer(8)?))
    }
}
