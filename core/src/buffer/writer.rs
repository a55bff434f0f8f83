//! buffer/writer.rs
//!
//! Append-only little-endian writer. Writing into a `Vec` cannot fail, so the
//! API is infallible.

use byteorder::{ByteOrder, LittleEndian};

#[derive(Debug, Default, Clone)]
pub struct BlockWriter {
    out: Vec<u8>,
}

impl BlockWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self { out: Vec::with_capacity(cap) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn put_u8(&mut self, v: u8) -> &mut Self {
        self.out.push(v);
        self
    }

    pub fn put_u16_le(&mut self, v: u16) -> &mut Self {
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, v);
        self.put_bytes(&b)
    }

    pub fn put_u32_le(&mut self, v: u32) -> &mut Self {
        let mut b = [0u8; 4];
        LittleEndian::write_u32(&mut b, v);
        self.put_bytes(&b)
    }

    pub fn put_u64_le(&mut self, v: u64) -> &mut Self {
        let mut b = [0u8; 8];
        LittleEndian::write_u64(&mut b, v);
        self.put_bytes(&b)
    }

    pub fn put_bytes(&mut self, b: &[u8]) -> &mut Self {
        self.out.extend_from_slice(b);
        self
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.out
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }
}
