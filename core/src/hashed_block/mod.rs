//! hashed_block/mod.rs
//! Hashed-block integrity layer (HBIO) around the compressed document.
//!
//! Wire layout, repeated until a zero-length record:
//!
//! ```text
//! [ index (u32 LE) ][ sha256(data) (32) ][ length (u32 LE) ][ data (length) ]
//! ```
//!
//! The terminator carries the next index, an all-zero digest and length 0, and
//! is the last record of the stream. Digests and the terminator are checked on
//! every decode; only index ordering depends on `IndexPolicy`.
//! The outer cipher is unauthenticated CBC, so this layer is the only integrity
//! check on the document bytes.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
