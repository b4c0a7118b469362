//! Latency log analysis.
//!
//! Provides functionality for:
//! - Extracting per-device latency reports from tester console output
//! - Descriptive statistics and a fixed-width console summary
//! - A violin plot of the latency distribution of every device

pub mod log_loader;
pub mod log_parser;
pub mod sample_log;
pub mod stats;
pub mod summary;
pub mod types;
pub mod violin;

pub use log_loader::load_log;
pub use log_parser::parse_latency_data;
pub use summary::{render_summary_table, write_report};
pub use types::{LatencyRecord, LatencyRecords, LatencyStats};
pub use violin::{VIOLIN_PLOT_FILE, create_violinplot};
