//! document/mod.rs
//! Boundary between the container pipeline and the hierarchical document.
//!
//! Design notes:
//! - `Node` is the in-memory tree handed to and returned from the pipeline.
//! - `PackedNode` is its serialized shape; protected values are stream-ciphered
//!   and base64 encoded only here, at the pack/unpack boundary.
//! - `DocumentFormat` is the seam for the byte representation (JSON bundled).

pub mod types;
pub mod pack;
pub mod format;

pub use types::*;
pub use pack::*;
pub use format::*;
