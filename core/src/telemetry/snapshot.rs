// ## src/telemetry/snapshot.rs

//! telemetry/snapshot.rs
//!
//! Immutable telemetry snapshot.
//!
//! Design notes:
//! - Built once from counters and a finished timer.
//! - Compression ratio is `compressed / document`, 0 for an empty document.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    pub compression_ratio: f64,
    pub throughput_document_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_document > 0 {
            counters.bytes_compressed as f64 / counters.bytes_document as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_document as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            compression_ratio,
            throughput_document_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Stage times never exceed the elapsed wall time; ciphertext covers the hashed stream.
    pub fn sanity_check(&self) -> bool {
        self.counters.bytes_ciphertext >= self.counters.bytes_hashed
            && self.total_stage_time() <= self.elapsed
    }

    pub fn output_bytes(&self) -> u64 {
        self.counters.container_bytes()
    }
}
