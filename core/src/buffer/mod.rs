//! buffer/mod.rs
//! Sequential cursor over an in-memory byte buffer, plus the matching writer.
//!
//! Notes:
//! - Reads never move backwards and never panic; reading past the end is
//!   `BufferError::OutOfBounds`.
//! - All fixed-width integers are little-endian.

pub mod types;
pub mod reader;
pub mod writer;

pub use types::*;
pub use reader::*;
pub use writer::*;
