//! pipeline/mod.rs
//! Container read/write pipeline.
//!
//! Write: `BuildOptions → Pack → Serialize → Compress? → Chunk → PrependStreamStart
//! → DeriveMasterKey → Encrypt → PrependHeader`.
//!
//! Read: `ParseHeader → DeriveMasterKey → Decrypt → VerifyStreamStart → Dechunk
//! → Decompress? → Parse → VerifyHeaderHash → Unpack`.
//!
//! Notes:
//! - Any failing stage aborts the whole operation; partial documents are never returned.
//! - Nothing is retried; a second attempt with other credentials is a new `read`.

pub mod types;
pub mod writer;
pub mod reader;

pub use types::*;
pub use writer::*;
pub use reader::*;
