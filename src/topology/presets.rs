//! Built-in node layouts.

use serde::Deserialize;

use super::types::{Point, Topology};

/// Named layouts available without a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyPreset {
    /// 10 nodes on the diagonal, (i, i).
    Linear,
    /// 24 nodes on a 6 x 4 grid.
    #[default]
    Grid,
    /// Two loose clusters of four nodes bridged by two relays.
    Clustered,
}

const CLUSTERED_NODES: [(f64, f64); 10] = [
    (0.0, 0.0),
    (0.0, 1.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (1.7, 2.5),
    (2.3, 1.5),
    (3.0, 3.0),
    (3.0, 4.0),
    (4.0, 3.0),
    (4.0, 4.0),
];

impl TopologyPreset {
    pub fn name(self) -> &'static str {
        match self {
            TopologyPreset::Linear => "network1",
            TopologyPreset::Grid => "network2",
            TopologyPreset::Clustered => "network3",
        }
    }

    pub fn connectivity_radius(self) -> f64 {
        match self {
            TopologyPreset::Linear => 1.7,
            TopologyPreset::Grid => 2.9,
            TopologyPreset::Clustered => 2.2,
        }
    }

    pub fn nodes(self) -> Vec<Point> {
        match self {
            TopologyPreset::Linear => (0..10).map(|i| Point::new(i as f64, i as f64)).collect(),
            TopologyPreset::Grid => (0..6)
                .flat_map(|i| (0..4).map(move |j| Point::new(i as f64, j as f64)))
                .collect(),
            TopologyPreset::Clustered => CLUSTERED_NODES.iter().map(|&p| p.into()).collect(),
        }
    }

    pub fn build(self) -> Topology {
        Topology::new(self.name(), self.nodes(), self.connectivity_radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_shapes() {
        let linear = TopologyPreset::Linear.build();
        assert_eq!(linear.node_count(), 10);
        assert_eq!(linear.nodes[7], Point::new(7.0, 7.0));
        assert_eq!(linear.connectivity_radius, 1.7);

        let grid = TopologyPreset::Grid.build();
        assert_eq!(grid.name, "network2");
        assert_eq!(grid.node_count(), 24);
        // i-major ordering: index 5 is (1, 1)
        assert_eq!(grid.nodes[5], Point::new(1.0, 1.0));
        assert_eq!(grid.extent(), (5.0, 3.0));

        let clustered = TopologyPreset::Clustered.build();
        assert_eq!(clustered.node_count(), 10);
        assert_eq!(clustered.nodes[4], Point::new(1.7, 2.5));
        assert_eq!(clustered.connectivity_radius, 2.2);
    }

    #[test]
    fn presets_are_valid() {
        for preset in [TopologyPreset::Linear, TopologyPreset::Grid, TopologyPreset::Clustered] {
            assert!(preset.build().validate().is_ok());
        }
    }
}
