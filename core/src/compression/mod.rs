//! compression/mod.rs
//! Optional compression of the serialized document before chunking.
//!
//! Notes:
//! - The mode comes from the `CompressionFlags` header field (`0` none, `1` gzip).
//! - Unknown mode ids are rejected before any inflate is attempted.
//! - Registry resolves mode ids to implementations.

pub mod types;
pub mod registry;
pub mod codecs;

pub use types::*;
pub use registry::*;
