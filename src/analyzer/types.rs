//! Type definitions specific to the analyzer module.

use std::collections::BTreeMap;

/// One `Dev <n> addr 0x<hex> avg latency: ...` log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyRecord {
    /// Device index as printed by the tester.
    pub device: u32,
    /// Unicast address token, kept verbatim (e.g. `0x000a`).
    pub address: String,
    /// Average reported by the log itself, never recomputed.
    pub reported_avg_ms: u32,
    /// Failed round trips reported for the device.
    pub failures: u32,
    /// Raw round-trip samples in milliseconds, in log order.
    pub samples: Vec<u32>,
}

/// Records keyed by device index; iteration is in device order.
pub type LatencyRecords = BTreeMap<u32, LatencyRecord>;

/// Descriptive statistics over one device's samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyStats {
    pub min: u32,
    pub max: u32,
    pub mean: f64,
    pub median: f64,
}
