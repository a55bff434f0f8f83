//! keys/mod.rs
//! Credential sources and their composite.
//!
//! Notes:
//! - A source only has to produce a 32-byte hash and a priority.
//! - Sources are combined in ascending priority, so insertion order never
//!   changes the composite hash.

pub mod types;
pub mod password;
pub mod key_file;
pub mod composite;

pub use types::*;
pub use password::*;
pub use key_file::*;
pub use composite::*;
