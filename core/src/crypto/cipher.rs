//! crypto/cipher.rs
//! Content-cipher registry.
//!
//! Design:
//! - The registry is closed: a cipher is a `ContentCipher` impl plus a `CipherId`
//!   arm in `resolve`. There is no runtime plugin mechanism.
//! - AES-256-CBC with PKCS#7 padding is the only registered cipher and the default.
//!
//! Security notes:
//! - CBC is unauthenticated. Integrity of the payload comes from the stream start
//!   bytes and the hashed-block layer that wrap the plaintext.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::types::{CipherId, CryptoError, AES_BLOCK_LEN, KEY_LEN_32};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// `31C1F2E6-BF71-4350-BE58-05216AFC5AFF`, base64 `McHy5r9xQ1C+WAUhavxa/w==`.
pub const AES256_CBC_ID: CipherId = CipherId([
    0x31, 0xC1, 0xF2, 0xE6, 0xBF, 0x71, 0x43, 0x50,
    0xBE, 0x58, 0x05, 0x21, 0x6A, 0xFC, 0x5A, 0xFF,
]);

/// Cipher used when no override is supplied.
pub const DEFAULT_CIPHER_ID: CipherId = AES256_CBC_ID;

/// Outer cipher wrapping `[stream start bytes | hashed-block stream]`.
pub trait ContentCipher: Send + Sync {
    fn name(&self) -> &'static str;
    fn id(&self) -> CipherId;
    fn key_len(&self) -> usize;
    fn iv_len(&self) -> usize;
    fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError>;
    fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// AES-256 in CBC mode, PKCS#7 padded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aes256Cbc;

static AES256_CBC: Aes256Cbc = Aes256Cbc;

impl Aes256Cbc {
    fn check_lengths(key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
        if key.len() != KEY_LEN_32 {
            return Err(CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: key.len() });
        }
        if iv.len() != AES_BLOCK_LEN {
            return Err(CryptoError::InvalidIvLen { expected: AES_BLOCK_LEN, actual: iv.len() });
        }
        Ok(())
    }
}

impl ContentCipher for Aes256Cbc {
    fn name(&self) -> &'static str {
        "AES-256-CBC"
    }

    fn id(&self) -> CipherId {
        AES256_CBC_ID
    }

    fn key_len(&self) -> usize {
        KEY_LEN_32
    }

    fn iv_len(&self) -> usize {
        AES_BLOCK_LEN
    }

    fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::check_lengths(key, iv)?;
        let enc = Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: key.len() })?;
        Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::check_lengths(key, iv)?;
        let dec = Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidKeyLen { expected: KEY_LEN_32, actual: key.len() })?;
        // Also rejects ciphertext that is not a whole number of blocks.
        dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptoError::BadPadding { cipher: self.name() })
    }
}

/// Resolve a header cipher id to its implementation.
pub fn resolve(id: &CipherId) -> Result<&'static dyn ContentCipher, CryptoError> {
    match *id {
        AES256_CBC_ID => Ok(&AES256_CBC),
        other => Err(CryptoError::UnknownCipher { id: other.to_base64() }),
    }
}

#[inline]
pub fn is_supported(id: &CipherId) -> bool {
    resolve(id).is_ok()
}

/// Ids accepted by `resolve`.
pub fn supported_ciphers() -> &'static [CipherId] {
    &[AES256_CBC_ID]
}
