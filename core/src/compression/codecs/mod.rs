//! compression/codecs/mod.rs

pub mod gzip;
pub mod none;

pub use gzip::*;
pub use none::*;
