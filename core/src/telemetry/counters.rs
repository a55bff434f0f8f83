// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters filled in while a container is read or written.
//!
//! Summary: byte sizes at each pipeline boundary plus block and value counts.
//! Converted into an immutable `TelemetrySnapshot` at pipeline end.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub bytes_header: u64,
    /// Serialized document size.
    pub bytes_document: u64,
    /// Document after compression (equal to `bytes_document` for `None`).
    pub bytes_compressed: u64,
    /// Hashed-block stream including the stream start bytes.
    pub bytes_hashed: u64,
    pub bytes_ciphertext: u64,
    pub hashed_blocks: u64,
    pub protected_values: u64,
    pub transform_rounds: u64,
}

impl TelemetryCounters {
    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_header += header_len as u64;
    }

    pub fn add_document(&mut self, document_len: usize, compressed_len: usize) {
        self.bytes_document += document_len as u64;
        self.bytes_compressed += compressed_len as u64;
    }

    pub fn add_hashed(&mut self, hashed_len: usize, blocks: usize) {
        self.bytes_hashed += hashed_len as u64;
        self.hashed_blocks += blocks as u64;
    }

    pub fn add_ciphertext(&mut self, ct_len: usize) {
        self.bytes_ciphertext += ct_len as u64;
    }

    /// Bytes on disk: header plus ciphertext.
    pub fn container_bytes(&self) -> u64 {
        self.bytes_header + self.bytes_ciphertext
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        *self += other.clone();
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.bytes_header      += rhs.bytes_header;
        self.bytes_document    += rhs.bytes_document;
        self.bytes_compressed  += rhs.bytes_compressed;
        self.bytes_hashed      += rhs.bytes_hashed;
        self.bytes_ciphertext  += rhs.bytes_ciphertext;
        self.hashed_blocks     += rhs.hashed_blocks;
        self.protected_values  += rhs.protected_values;
        self.transform_rounds  += rhs.transform_rounds;
    }
}
