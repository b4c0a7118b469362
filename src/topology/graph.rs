//! Complete graph over a topology and distance-based edge colouring.

use plotters::style::RGBColor;

use super::geometry::distance;
use super::types::{Point, Topology};

/// Gradient stops from strongest (short link) to weakest (link at the radius).
const EDGE_GRADIENT: [RGBColor; 4] = [
    RGBColor(0xff, 0x00, 0x00),
    RGBColor(0xff, 0x66, 0x66),
    RGBColor(0xff, 0x99, 0x99),
    RGBColor(0xff, 0xc5, 0xc5),
];

/// Gradient position used for every link shorter than the short-range threshold.
const SHORT_RANGE_SHADE: f64 = 0.1;

/// Undirected edge between two vertex indices, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// One vertex per node, one edge per unordered node pair.
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    pub vertices: Vec<Point>,
    pub edges: Vec<Edge>,
}

impl TopologyGraph {
    pub fn from_topology(topology: &Topology) -> Self {
        let vertices = topology.nodes.clone();
        let mut edges = Vec::with_capacity(vertices.len() * vertices.len().saturating_sub(1) / 2);
        for a in 0..vertices.len() {
            for b in (a + 1)..vertices.len() {
                edges.push(Edge {
                    a,
                    b,
                    distance: distance(&vertices[a], &vertices[b]),
                });
            }
        }
        Self { vertices, edges }
    }

    /// Edges that get drawn, paired with their colour.
    pub fn visible_edges(&self, connectivity_radius: f64, short_range_threshold: f64) -> Vec<(Edge, RGBColor)> {
        self.edges
            .iter()
            .filter_map(|edge| {
                edge_color(edge.distance, connectivity_radius, short_range_threshold).map(|color| (*edge, color))
            })
            .collect()
    }
}

/// Colour for an edge of length `distance`, or `None` if the edge is not drawn.
///
/// Links up to `short_range_threshold` share the strongest shade; links up to the
/// radius shade out linearly with `distance / radius`.
pub fn edge_color(distance: f64, connectivity_radius: f64, short_range_threshold: f64) -> Option<RGBColor> {
    if distance <= short_range_threshold {
        Some(gradient(SHORT_RANGE_SHADE))
    } else if distance <= connectivity_radius {
        Some(gradient(distance / connectivity_radius))
    } else {
        None
    }
}

/// Sample the edge gradient at `t` in `[0, 1]` (clamped).
pub fn gradient(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (EDGE_GRADIENT.len() - 1) as f64;
    let scaled = t * segments;
    let idx = (scaled.floor() as usize).min(EDGE_GRADIENT.len() - 2);
    let frac = scaled - idx as f64;

    let RGBColor(r0, g0, b0) = EDGE_GRADIENT[idx];
    let RGBColor(r1, g1, b1) = EDGE_GRADIENT[idx + 1];
    let lerp = |c0: u8, c1: u8| (c0 as f64 + (c1 as f64 - c0 as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::TopologyPreset;

    #[test]
    fn complete_graph_edge_count() {
        let graph = TopologyGraph::from_topology(&TopologyPreset::Grid.build());
        assert_eq!(graph.vertices.len(), 24);
        assert_eq!(graph.edges.len(), 24 * 23 / 2);
        assert!(graph.edges.iter().all(|e| e.a < e.b));
    }

    #[test]
    fn gradient_hits_stops() {
        assert_eq!(gradient(0.0), RGBColor(0xff, 0x00, 0x00));
        assert_eq!(gradient(1.0), RGBColor(0xff, 0xc5, 0xc5));
        assert_eq!(gradient(2.0), RGBColor(0xff, 0xc5, 0xc5));
        assert_eq!(gradient(-1.0), RGBColor(0xff, 0x00, 0x00));
        // Second stop sits at 1/3
        assert_eq!(gradient(1.0 / 3.0), RGBColor(0xff, 0x66, 0x66));
    }

    #[test]
    fn gradient_lightens_with_distance() {
        let mut last = 0u8;
        for step in 0..=10 {
            let RGBColor(_, g, _) = gradient(step as f64 / 10.0);
            assert!(g >= last);
            last = g;
        }
    }

    #[test]
    fn edge_color_bands() {
        let short = edge_color(0.5, 2.9, 1.0).unwrap();
        assert_eq!(short, gradient(0.1));
        assert_eq!(edge_color(1.0, 2.9, 1.0).unwrap(), short);
        assert_eq!(edge_color(2.0, 2.9, 1.0).unwrap(), gradient(2.0 / 2.9));
        assert!(edge_color(2.91, 2.9, 1.0).is_none());
    }

    #[test]
    fn short_threshold_beyond_radius_still_draws() {
        // A threshold larger than the radius keeps short edges visible.
        assert!(edge_color(1.5, 1.0, 2.0).is_some());
        assert!(edge_color(2.5, 1.0, 2.0).is_none());
    }

    #[test]
    fn visible_edges_on_linear_preset() {
        let topo = TopologyPreset::Linear.build();
        let graph = TopologyGraph::from_topology(&topo);
        // Diagonal neighbours are sqrt(2) apart, next ones 2*sqrt(2) > 1.7.
        let visible = graph.visible_edges(topo.connectivity_radius, 1.0);
        assert_eq!(visible.len(), 9);
        assert!(visible.iter().all(|(e, _)| e.b == e.a + 1));
    }
}
