//! Core topology data structures.

use serde::Deserialize;

/// Simple 2D point in world units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A named node layout. A node's index in `nodes` is its device ID.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Base name of the generated files.
    pub name: String,
    pub nodes: Vec<Point>,
    /// Maximum distance at which two nodes are considered linked.
    pub connectivity_radius: f64,
}

impl Topology {
    pub fn new(name: impl Into<String>, nodes: Vec<Point>, connectivity_radius: f64) -> Self {
        Self {
            name: name.into(),
            nodes,
            connectivity_radius,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Largest x and y coordinate over all nodes, clamped at zero.
    pub fn extent(&self) -> (f64, f64) {
        self.nodes
            .iter()
            .fold((0.0_f64, 0.0_f64), |(x, y), p| (x.max(p.x), y.max(p.y)))
    }

    /// Check the layout can be written and drawn.
    ///
    /// # Returns
    ///
    /// `Ok(())` if validation passes, `Err(String)` with error description otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Topology name must not be empty".to_string());
        }
        if self.name.contains(['/', '\\']) {
            return Err(format!("Topology name '{}' must not contain path separators", self.name));
        }
        if self.nodes.is_empty() {
            return Err("Topology must contain at least one node".to_string());
        }
        if !(self.connectivity_radius.is_finite() && self.connectivity_radius > 0.0) {
            return Err(format!(
                "Connectivity radius must be positive, got {}",
                self.connectivity_radius
            ));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if !node.x.is_finite() || !node.y.is_finite() {
                return Err(format!("Node {} position ({}, {}) is not finite", idx, node.x, node.y));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_ignores_negative_coordinates() {
        let topo = Topology::new("t", vec![Point::new(-2.0, 1.0), Point::new(3.0, -4.0)], 1.0);
        assert_eq!(topo.extent(), (3.0, 1.0));
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        assert!(Topology::new("t", vec![], 1.0).validate().is_err());
        assert!(Topology::new("t", vec![Point::new(0.0, 0.0)], 0.0).validate().is_err());
        assert!(Topology::new("t", vec![Point::new(0.0, 0.0)], f64::NAN).validate().is_err());
        assert!(Topology::new("t", vec![Point::new(f64::INFINITY, 0.0)], 1.0).validate().is_err());
        assert!(Topology::new(" ", vec![Point::new(0.0, 0.0)], 1.0).validate().is_err());
        assert!(Topology::new("a/b", vec![Point::new(0.0, 0.0)], 1.0).validate().is_err());
        assert!(Topology::new("t", vec![Point::new(0.0, 0.0)], 1.0).validate().is_ok());
    }
}
