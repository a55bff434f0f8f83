//! keys/composite.rs
//! Composite key: every credential factor bound into one 32-byte hash.

use std::fmt;

use sha2::{Digest as _, Sha256};
use zeroize::Zeroizing;

use crate::crypto::kdf::derive_master_key;
use crate::crypto::types::KEY_LEN_32;
use crate::keys::types::{CredentialSource, KeyError};

#[derive(Default)]
pub struct CompositeKey {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CompositeKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sources(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    pub fn add(&mut self, source: impl CredentialSource + 'static) -> &mut Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }

    /// `SHA256(h_1 || h_2 || ...)` over the source hashes in ascending priority.
    ///
    /// The sort is stable, so equal priorities keep insertion order.
    pub fn hash(&self) -> Result<Zeroizing<[u8; KEY_LEN_32]>, KeyError> {
        if self.sources.is_empty() {
            return Err(KeyError::NoCredentials);
        }

        let mut ordered: Vec<&dyn CredentialSource> = self.sources.iter().map(|s| s.as_ref()).collect();
        ordered.sort_by_key(|s| s.priority());

        let mut hasher = Sha256::new();
        for source in ordered {
            let h = Zeroizing::new(source.hash());
            hasher.update(h.as_slice());
        }
        Ok(Zeroizing::new(hasher.finalize().into()))
    }

    /// Composite hash stretched into the outer-cipher key.
    pub fn master_key(
        &self,
        master_seed: &[u8],
        transform_seed: &[u8],
        rounds: u64,
    ) -> Result<Zeroizing<[u8; KEY_LEN_32]>, KeyError> {
        let composite = self.hash()?;
        Ok(derive_master_key(composite.as_slice(), master_seed, transform_seed, rounds)?)
    }
}

impl fmt::Debug for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeKey").field("sources", &self.sources.len()).finish()
    }
}
