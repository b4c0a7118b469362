//! Generate the attenuation coefficient file and topology image.
//!
//! Reads `mesh_tools.toml` from the working directory when present; otherwise
//! uses the `grid` preset with the default attenuation scale.

use anyhow::{Context, Result};
use log::info;

use mesh_nw_tools::common::ToolConfig;
use mesh_nw_tools::common::logging::init_logging;
use mesh_nw_tools::topology::{
    attenuation_params, generate_attenuation_file, resolve_topology, visualize_network,
};

fn main() -> Result<()> {
    init_logging();
    info!("Starting up");

    let config = ToolConfig::load_or_default(&ToolConfig::default_path()).context("Failed to load configuration")?;
    let topo_config = &config.topology;

    let topology = resolve_topology(topo_config).context("Failed to build topology")?;
    let params = attenuation_params(topo_config, &topology);
    info!(
        "Topology {}: {} nodes, connectivity radius {}, max attenuation {}, out of range {}",
        topology.name,
        topology.node_count(),
        params.connectivity_radius,
        params.max_attenuation,
        params.out_of_range
    );

    let coeff_path = generate_attenuation_file(&topology, &params, &topo_config.output_dir)
        .context("Failed to generate attenuation file")?;
    info!("Attenuation file saved as {}", coeff_path.display());

    let image_path = visualize_network(&topology, topo_config.short_range_threshold, &topo_config.output_dir)
        .context("Failed to draw topology")?;
    info!("Topology image saved as {}", image_path.display());

    Ok(())
}
