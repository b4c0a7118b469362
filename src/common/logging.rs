//! Logger initialisation used by both binaries.

use env_logger::Builder;
use log::LevelFilter;

/// Install the process-wide logger.
///
/// Filters are fixed: `Info` for dependencies, `Debug` for this crate. Calling it
/// twice is harmless; the second attempt is ignored.
pub fn init_logging() {
    let _ = Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("mesh_nw_tools"), LevelFilter::Debug)
        .filter(Some("mesh_att_gen"), LevelFilter::Debug)
        .filter(Some("mesh_latency_plot"), LevelFilter::Debug)
        .format_timestamp(None)
        .try_init();
}
