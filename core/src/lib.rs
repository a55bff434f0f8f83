//! kdbx-core
//!
//! Pure Rust reader/writer for the KeePass 2.x (KDBX 3.1) container format.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Building blocks
pub mod buffer;
pub mod compression;
pub mod crypto;
pub mod document;
pub mod hashed_block;
pub mod headers;
pub mod keys;
pub mod telemetry;

// Container layer
pub mod pipeline;

use crate::document::Node;
use crate::keys::CompositeKey;
use crate::pipeline::{OptionsOverrides, Reader, Writer};
use crate::types::ContainerError;

/// Read a container with the default configuration and JSON document format.
pub fn read(bytes: &[u8], key: &CompositeKey) -> Result<Node, ContainerError> {
    Reader::default().read(bytes, key)
}

/// Write a container with the default configuration and JSON document format.
pub fn write(
    doc: &Node,
    key: &CompositeKey,
    overrides: Option<&OptionsOverrides>,
) -> Result<Vec<u8>, ContainerError> {
    Writer::default().write(doc, key, overrides)
}

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::CompressionMode;
    pub use crate::config::CodecConfig;
    pub use crate::crypto::{CipherId, ProtectedBuffer, AES256_CBC_ID};
    pub use crate::document::{JsonFormat, Node, Text};
    pub use crate::headers::ContainerOptions;
    pub use crate::keys::{generate_key_file, CompositeKey, KeyFile, PasswordKey};
    pub use crate::pipeline::{OptionsOverrides, Reader, Writer};
    pub use crate::types::{ContainerError, IntegrityError};
    pub use crate::{read, write};
}
