//! crypto/mod.rs
//! Primitives of the container: outer cipher registry, Salsa20 keystream,
//! key schedule, protected buffers.

pub mod types;
pub mod cipher;
pub mod digest;
pub mod kdf;
pub mod protected;
pub mod random;
pub mod salsa20;

pub use types::*;
pub use cipher::*;
pub use digest::*;
pub use kdf::*;
pub use protected::*;
pub use random::*;
pub use self::salsa20::*;
