//! constants.rs
//! Wire constants of the KDBX 3.1 container.
//!
//! Notes:
//! - Every multi-byte integer on the wire is little-endian.
//! - Signatures and version are written verbatim, in this order, at offset 0.

/// First file signature (KeePass family marker).
pub const FILE_SIGNATURE_1: [u8; 4] = [0x03, 0xD9, 0xA2, 0x9A];
/// Second file signature (KeePass 2.x marker).
pub const FILE_SIGNATURE_2: [u8; 4] = [0x67, 0xFB, 0x4B, 0xB5];
/// Version written on every save: minor 1, major 3 (`0x0003_0001` LE).
pub const FILE_VERSION: [u8; 4] = [0x01, 0x00, 0x03, 0x00];

pub const FILE_VERSION_MAJOR: u16 = 3;
pub const FILE_VERSION_MINOR: u16 = 1;
/// Two signatures plus the version word.
pub const PREAMBLE_LEN: usize = 12;

/// Payload of the `EndOfHeader` field.
pub const END_OF_HEADER: [u8; 4] = *b"\r\n\r\n";

/// Fixed field sizes.
pub const CIPHER_ID_LEN: usize = 16;
pub const SEED_LEN: usize = 32;
pub const IV_LEN: usize = 16;
pub const PROTECTED_STREAM_KEY_LEN: usize = 32;
pub const STREAM_START_BYTES_LEN: usize = 32;
pub const TRANSFORM_ROUNDS_LEN: usize = 8;
pub const COMPRESSION_FLAGS_LEN: usize = 4;
pub const INNER_STREAM_ID_LEN: usize = 4;

/// Inner random stream identifiers; only Salsa20 is supported.
pub mod inner_stream_ids {
    pub const SALSA20: u32 = 2;
}

/// Fixed nonce of the inner Salsa20 stream.
pub const INNER_STREAM_NONCE: [u8; 8] = [0xE8, 0x30, 0x09, 0x4B, 0x97, 0x20, 0x5D, 0x2A];

/// Hashed-block payload size (1 MiB). The last block may be shorter.
pub const HASHED_BLOCK_SIZE: usize = 1024 * 1024;

/// Defaults when no override is supplied.
pub const DEFAULT_TRANSFORM_ROUNDS: u32 = 6000;
pub const DEFAULT_GZIP_LEVEL: u32 = 6;

/// Credential priorities; lower is combined first.
pub mod priorities {
    pub const PASSWORD: i32 = 100;
    pub const KEY_FILE: i32 = 200;
}
