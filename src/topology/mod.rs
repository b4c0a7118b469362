//! Topology and attenuation generation.
//!
//! Turns a node layout into:
//! - an attenuation coefficient file (`<name>_att_file.coeff`) with one line per
//!   directed node pair, linear in distance up to the connectivity radius;
//! - a PNG drawing of the nodes and the links inside the radius.
//!
//! ## Module Organization
//!
//! - `types`: `Point` and `Topology` plus validation
//! - `geometry`: Euclidean distance helpers
//! - `presets`: built-in layouts (`linear`, `grid`, `clustered`)
//! - `scene`: JSON scene file loading
//! - `attenuation`: the distance to attenuation mapping
//! - `coeff_file`: the coefficient file writer
//! - `graph`: complete graph over the nodes and edge colouring
//! - `visualize`: PNG rendering with plotters

pub mod attenuation;
pub mod coeff_file;
pub mod geometry;
pub mod graph;
pub mod presets;
pub mod scene;
pub mod types;
pub mod visualize;

pub use attenuation::{AttenuationParams, calculate_attenuation};
pub use coeff_file::{coeff_file_path, generate_attenuation_file, write_attenuation_lines};
pub use graph::TopologyGraph;
pub use presets::TopologyPreset;
pub use types::{Point, Topology};
pub use visualize::{image_file_path, visualize_network};

use log::info;

use crate::common::{TopologyConfig, TopologyError};

/// Build the topology selected by the configuration.
///
/// A scene file wins over the preset; `name` and `connectivity-radius` override
/// whatever the preset or scene defined.
pub fn resolve_topology(config: &TopologyConfig) -> Result<Topology, TopologyError> {
    let mut topology = match &config.scene_file {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            scene::load_scene(path)?
        }
        None => {
            info!("Using built-in {:?} topology", config.preset);
            config.preset.build()
        }
    };

    if let Some(name) = &config.name {
        topology.name = name.clone();
    }
    if let Some(radius) = config.connectivity_radius {
        topology.connectivity_radius = radius;
    }
    topology.validate().map_err(TopologyError::Validation)?;
    Ok(topology)
}

/// Attenuation constants for `topology` under `config`.
pub fn attenuation_params(config: &TopologyConfig, topology: &Topology) -> AttenuationParams {
    AttenuationParams {
        connectivity_radius: topology.connectivity_radius,
        max_attenuation: config.max_attenuation,
        out_of_range: config.out_of_range_attenuation(),
    }
}
