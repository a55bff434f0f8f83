//! headers/mod.rs
//! TLV header of the container.
//!
//! Layout:
//!
//! ```text
//! [ sig1 (4) ][ sig2 (4) ][ version (u32 LE) ]
//! { [ field id (u8) ][ length (u16 LE) ][ payload (length) ] } ... EndOfHeader
//! ```
//!
//! Notes:
//! - Fixed-length fields must match their size exactly or the header is malformed.
//! - Unknown field ids are read past and discarded.
//! - Options are parsed fresh for every read and generated fresh for every write.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
