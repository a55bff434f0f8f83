//! telemetry/mod.rs
//! Unified telemetry module: counters, timers, and immutable snapshots.
//!
//! Industry notes:
//! - Counters are plain integers filled in by the single-threaded pipeline.
//! - Stage timers show where a read or write spends its time; key
//!   derivation usually dominates.
//! - Snapshots are immutable and serde-serializable for logs and benchmarks.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
