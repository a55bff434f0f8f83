//! keys/password.rs

use std::fmt;

use crate::constants::priorities;
use crate::crypto::digest::sha256;
use crate::crypto::protected::ProtectedBuffer;
use crate::crypto::types::KEY_LEN_32;
use crate::keys::types::CredentialSource;

/// Master password factor: `SHA256(utf8(password))`.
pub struct PasswordKey {
    hash: ProtectedBuffer,
}

impl PasswordKey {
    pub fn new(password: &str) -> Self {
        Self::from_bytes(password.as_bytes())
    }

    pub fn from_bytes(password: &[u8]) -> Self {
        let digest = zeroize::Zeroizing::new(sha256(password));
        Self { hash: ProtectedBuffer::new(digest.as_slice()) }
    }
}

impl CredentialSource for PasswordKey {
    fn hash(&self) -> [u8; KEY_LEN_32] {
        let mut out = [0u8; KEY_LEN_32];
        out.copy_from_slice(&self.hash.reveal());
        out
    }

    fn priority(&self) -> i32 {
        priorities::PASSWORD
    }
}

impl fmt::Debug for PasswordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordKey(<redacted>)")
    }
}
