//! Fixed-width console summary of the parsed latency records.

use std::io::Write;
use std::path::Path;

use super::stats::round_to_tenth;
use super::types::LatencyRecords;
use super::violin::{VIOLIN_PLOT_FILE, create_violinplot};
use crate::common::AnalyzerError;

const RULE_WIDTH: usize = 50;

fn table_row(cells: [&str; 6]) -> String {
    let [dev, address, min, max, mean, median] = cells;
    format!("{:<5}{:<10}{:<8}{:<8}{:<8}{:<8}\n", dev, address, min, max, mean, median)
}

/// Render the summary table, one row per device in device order.
///
/// Columns are `Dev` (5), `Address` (10), then `Min`, `Max`, `Mean`, `Median`
/// (8 each). Devices without samples show `-` in the statistics columns.
pub fn render_summary_table(records: &LatencyRecords) -> String {
    let mut out = format!("Latency Statistics Summary:\n{}\n", "=".repeat(RULE_WIDTH));
    out.push_str(&table_row(["Dev", "Address", "Min", "Max", "Mean", "Median"]));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for record in records.values() {
        let device = record.device.to_string();
        let row = match record.stats() {
            Some(s) => table_row([
                &device,
                &record.address,
                &s.min.to_string(),
                &s.max.to_string(),
                &format!("{:.1}", round_to_tenth(s.mean)),
                &format!("{:.1}", s.median),
            ]),
            None => table_row([&device, &record.address, "-", "-", "-", "-"]),
        };
        out.push_str(&row);
    }
    out
}

/// Print the summary table to `out`, then render the violin plot into `dir`.
///
/// The table is written first so it is still shown when rendering fails.
pub fn write_report<W: Write>(records: &LatencyRecords, dir: &Path, out: &mut W) -> Result<(), AnalyzerError> {
    writeln!(out, "{}", render_summary_table(records))?;
    out.flush()?;

    create_violinplot(records, dir)?;
    writeln!(out, "Plot saved as '{}'", VIOLIN_PLOT_FILE)?;
    Ok(())
}
