//! Scene file loading and validation.
//!
//! A scene describes a custom node layout in JSON:
//!
//! ```text
//! {
//!   "name": "office",
//!   "connectivity_radius": 2.5,
//!   "nodes": [{"x": 0, "y": 0}, {"x": 1.5, "y": 0.5}]
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::types::{Point, Topology};
use crate::common::TopologyError;

/// Maximum number of nodes accepted from a scene file.
const MAX_NODES: usize = 1000;

/// Root structure of a scene file.
#[derive(Debug, Deserialize)]
struct SceneFile {
    name: String,
    connectivity_radius: f64,
    nodes: Vec<Point>,
}

/// Parse and validate a scene from JSON text.
pub fn parse_scene(data: &str) -> Result<Topology, TopologyError> {
    let scene: SceneFile = serde_json::from_str(data)?;
    if scene.nodes.len() > MAX_NODES {
        return Err(TopologyError::Validation(format!(
            "Node count {} exceeds maximum of {}",
            scene.nodes.len(),
            MAX_NODES
        )));
    }

    let topology = Topology::new(scene.name, scene.nodes, scene.connectivity_radius);
    topology.validate().map_err(TopologyError::Validation)?;
    Ok(topology)
}

/// Load and validate a scene from a file.
///
/// # Parameters
///
/// * `path` - Path to the scene JSON file
///
/// # Returns
///
/// The validated topology, or an error describing the read, parse or validation failure.
pub fn load_scene(path: &Path) -> Result<Topology, TopologyError> {
    let data = fs::read_to_string(path).map_err(|source| TopologyError::SceneRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scene(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_scene() {
        let topo = parse_scene(
            r#"{"name": "office", "connectivity_radius": 2.5,
                "nodes": [{"x": 0, "y": 0}, {"x": 1.5, "y": 0.5}]}"#,
        )
        .unwrap();
        assert_eq!(topo.name, "office");
        assert_eq!(topo.node_count(), 2);
        assert_eq!(topo.nodes[1], Point::new(1.5, 0.5));
    }

    #[test]
    fn rejects_empty_node_list() {
        let err = parse_scene(r#"{"name": "x", "connectivity_radius": 1.0, "nodes": []}"#).unwrap_err();
        assert!(matches!(err, TopologyError::Validation(_)));
    }

    #[test]
    fn rejects_negative_radius() {
        let err = parse_scene(r#"{"name": "x", "connectivity_radius": -1.0, "nodes": [{"x": 0, "y": 0}]}"#)
            .unwrap_err();
        assert!(matches!(err, TopologyError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_scene(r#"{"name": "x", "nodes": ["#).unwrap_err();
        assert!(matches!(err, TopologyError::SceneParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match load_scene(&path) {
            Err(TopologyError::SceneRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected SceneRead error, got {:?}", other.map(|t| t.name)),
        }
    }

    #[test]
    fn loads_scene_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, r#"{"name": "lab", "connectivity_radius": 3, "nodes": [{"x": 1, "y": 2}]}"#)
            .unwrap();
        let topo = load_scene(&path).unwrap();
        assert_eq!(topo.name, "lab");
        assert_eq!(topo.connectivity_radius, 3.0);
    }
}
