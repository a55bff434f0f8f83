//! keys/key_file.rs
//! Key-file factor and key-file generation.
//!
//! Accepted content, checked in this order:
//! 1. XML key file: the base64 text of `<Data>` must decode to 32 bytes.
//! 2. Exactly 32 bytes: used as-is.
//! 3. Exactly 64 hex characters: hex-decoded.
//! 4. Anything else: `SHA256(content)`.

use std::fmt;

use crate::constants::priorities;
use crate::crypto::digest::sha256;
use crate::crypto::protected::ProtectedBuffer;
use crate::crypto::random::random_array;
use crate::crypto::types::KEY_LEN_32;
use crate::keys::types::{CredentialSource, KeyError};
use crate::utils::{from_base64, to_base64};

pub const KEY_FILE_VERSION: &str = "1.00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFileKind {
    Xml,
    Raw,
    Hex,
    Hashed,
}

pub struct KeyFile {
    kind: KeyFileKind,
    hash: ProtectedBuffer,
}

impl KeyFile {
    pub fn from_bytes(content: &[u8]) -> Result<Self, KeyError> {
        let (kind, key) = parse_key_material(content)?;
        let key = zeroize::Zeroizing::new(key);
        Ok(Self { kind, hash: ProtectedBuffer::try_new(key.as_slice())? })
    }

    pub fn kind(&self) -> KeyFileKind {
        self.kind
    }
}

fn parse_key_material(content: &[u8]) -> Result<(KeyFileKind, [u8; KEY_LEN_32]), KeyError> {
    if let Some(data) = std::str::from_utf8(content).ok().and_then(xml_data_element) {
        let decoded = zeroize::Zeroizing::new(
            from_base64(data)
                .map_err(|e| KeyError::InvalidKeyFile(format!("<Data> is not base64: {}", e)))?,
        );
        let key: [u8; KEY_LEN_32] = decoded.as_slice().try_into().map_err(|_| {
            KeyError::InvalidKeyFile(format!(
                "<Data> must decode to {} bytes, got {}",
                KEY_LEN_32,
                decoded.len()
            ))
        })?;
        return Ok((KeyFileKind::Xml, key));
    }

    if content.len() == KEY_LEN_32 {
        let mut key = [0u8; KEY_LEN_32];
        key.copy_from_slice(content);
        return Ok((KeyFileKind::Raw, key));
    }

    if content.len() == KEY_LEN_32 * 2 {
        let mut key = [0u8; KEY_LEN_32];
        if hex::decode_to_slice(content, &mut key).is_ok() {
            return Ok((KeyFileKind::Hex, key));
        }
    }

    Ok((KeyFileKind::Hashed, sha256(content)))
}

/// Text between the first `<Data>` and the following `</Data>`.
fn xml_data_element(text: &str) -> Option<&str> {
    let start = text.find("<Data>")? + "<Data>".len();
    let len = text[start..].find("</Data>")?;
    Some(&text[start..start + len])
}

impl CredentialSource for KeyFile {
    fn hash(&self) -> [u8; KEY_LEN_32] {
        let mut out = [0u8; KEY_LEN_32];
        out.copy_from_slice(&self.hash.reveal());
        out
    }

    fn priority(&self) -> i32 {
        priorities::KEY_FILE
    }
}

impl fmt::Debug for KeyFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyFile").field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// New key file document holding 32 fresh random bytes.
///
/// Layout: `KeyFile/Meta/Version` and `KeyFile/Key/Data` (base64).
pub fn generate_key_file() -> Result<String, KeyError> {
    let key = zeroize::Zeroizing::new(random_array::<KEY_LEN_32>()?);
    Ok(format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
            "<KeyFile>\n",
            "  <Meta>\n",
            "    <Version>{}</Version>\n",
            "  </Meta>\n",
            "  <Key>\n",
            "    <Data>{}</Data>\n",
            "  </Key>\n",
            "</KeyFile>\n",
        ),
        KEY_FILE_VERSION,
        to_base64(key.as_slice()),
    ))
}
