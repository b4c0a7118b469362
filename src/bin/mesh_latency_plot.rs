//! Summarise per-device latency from tester logs and draw a violin plot.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use mesh_nw_tools::analyzer::{load_log, parse_latency_data, write_report};
use mesh_nw_tools::common::ToolConfig;
use mesh_nw_tools::common::logging::init_logging;

fn main() -> Result<()> {
    init_logging();
    info!("Starting up");

    let config = ToolConfig::load_or_default(&ToolConfig::default_path()).context("Failed to load configuration")?;

    let log_content = load_log(config.analyzer.log_file.as_deref())?;
    let records = parse_latency_data(&log_content).context("Failed to parse latency log")?;

    write_report(&records, Path::new("."), &mut std::io::stdout().lock()).context("Failed to create latency report")?;

    Ok(())
}
