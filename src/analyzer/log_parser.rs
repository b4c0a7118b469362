//! Extract per-device latency reports from tester console output.
//!
//! Recognised entries (anywhere inside a line, prefixes are ignored):
//!
//! ```text
//! d_09: @00:04:09.435151  [00:04:09.435,150] <inf> mesh_nw_test: Dev 0 addr 0x0001 avg latency:  78 ms failures 0 # values: 59 105 63 80 ...
//! ```

use log::debug;
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

use super::types::{LatencyRecord, LatencyRecords};
use crate::common::AnalyzerError;

static LATENCY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Dev (\d+) addr (0x[0-9a-fA-F]+) avg latency:[ \t]+(\d+) ms failures (\d+) # values: ([\d \t]+)",
    )
    .unwrap()
});

/// Parse every latency entry in `log_content`.
///
/// Lines that do not match are skipped. If a device index appears more than
/// once, the last entry wins.
///
/// # Returns
///
/// Records keyed by device index, or `AnalyzerError::InvalidNumber` when a
/// matched number does not fit in a `u32`.
pub fn parse_latency_data(log_content: &str) -> Result<LatencyRecords, AnalyzerError> {
    let mut records = LatencyRecords::new();
    for caps in LATENCY_LINE_REGEX.captures_iter(log_content) {
        let record = parse_record(&caps)?;
        if let Some(previous) = records.insert(record.device, record) {
            debug!(
                "Device {} reported more than once, replacing earlier entry ({})",
                previous.device, previous.address
            );
        }
    }
    debug!("Parsed latency reports for {} devices", records.len());
    Ok(records)
}

fn parse_record(caps: &Captures<'_>) -> Result<LatencyRecord, AnalyzerError> {
    let samples = caps[5]
        .split_whitespace()
        .map(|token| parse_number::<u32>("sample", token))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LatencyRecord {
        device: parse_number("device index", &caps[1])?,
        address: caps[2].to_string(),
        reported_avg_ms: parse_number("average latency", &caps[3])?,
        failures: parse_number("failure count", &caps[4])?,
        samples,
    })
}

fn parse_number<T>(field: &'static str, text: &str) -> Result<T, AnalyzerError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    text.parse().map_err(|source| AnalyzerError::InvalidNumber {
        field,
        value: text.to_string(),
        source,
    })
}
