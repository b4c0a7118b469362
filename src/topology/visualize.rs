//! Topology drawing.
//!
//! Nodes become labelled circles (`D<index>`), links inside the connectivity
//! radius become lines shaded by length. Links beyond the radius are left out.

use log::debug;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

use super::graph::{Edge, TopologyGraph};
use super::types::Topology;
use crate::common::TopologyError;

/// Pixels per world unit of network extent.
const DPI: f64 = 150.0;
/// Fill colour of node markers.
const NODE_COLOR: RGBColor = RGBColor(0x1f, 0x78, 0xb4);
/// Node marker radius in pixels.
const NODE_RADIUS: i32 = 22;
const LABEL_FONT_SIZE: f64 = 25.0;
const EDGE_WIDTH: u32 = 3;
const EDGE_OPACITY: f64 = 0.9;
/// Pixels kept free around the outermost nodes.
const CANVAS_MARGIN: u32 = 40;
/// Longest canvas side in pixels. Caps the RGB bitmap buffer at 3 GiB.
pub const MAX_CANVAS_SIDE: u32 = 1 << 15;

/// Location of the topology image for `topology_name` inside `output_dir`.
pub fn image_file_path(output_dir: &Path, topology_name: &str) -> PathBuf {
    output_dir.join(format!("{}.png", topology_name))
}

/// Image size in pixels: the network extent in inches at 150 DPI, at least one
/// inch per side.
///
/// Fails when either side would exceed [`MAX_CANVAS_SIDE`].
pub fn canvas_size(topology: &Topology) -> Result<(u32, u32), TopologyError> {
    let (x_size, y_size) = topology.extent();
    let to_px = |inches: f64| -> Result<u32, TopologyError> {
        let px = (inches.max(1.0) * DPI).round();
        if px > MAX_CANVAS_SIDE as f64 {
            return Err(TopologyError::Render(format!(
                "network extent {:.1} needs a {} px canvas side, limit is {} px",
                inches, px, MAX_CANVAS_SIDE
            )));
        }
        Ok(px as u32)
    };
    Ok((to_px(x_size)?, to_px(y_size)?))
}

/// World-coordinate range covering all nodes, widened when degenerate.
fn axis_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return -0.5..0.5;
    }
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 0.5)..(hi + 0.5);
    }
    lo..hi
}

/// Render the topology to `<output_dir>/<name>.png`, overwriting any previous image.
pub fn visualize_network(
    topology: &Topology,
    short_range_threshold: f64,
    output_dir: &Path,
) -> Result<PathBuf, TopologyError> {
    let path = image_file_path(output_dir, &topology.name);
    let graph = TopologyGraph::from_topology(topology);
    let visible = graph.visible_edges(topology.connectivity_radius, short_range_threshold);
    debug!(
        "Drawing {} of {} links for {}",
        visible.len(),
        graph.edges.len(),
        topology.name
    );

    let size = canvas_size(topology)?;
    draw_topology(&graph, &visible, size, &path)?;
    Ok(path)
}

fn draw_topology(
    graph: &TopologyGraph,
    visible: &[(Edge, RGBColor)],
    size: (u32, u32),
    path: &Path,
) -> Result<(), TopologyError> {
    let render_err = |e: &dyn std::fmt::Display| TopologyError::Render(e.to_string());

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(&e))?;

    let x_range = axis_range(graph.vertices.iter().map(|p| p.x));
    let y_range = axis_range(graph.vertices.iter().map(|p| p.y));
    let mut chart = ChartBuilder::on(&root)
        .margin(CANVAS_MARGIN)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| render_err(&e))?;

    chart
        .draw_series(visible.iter().map(|(edge, color)| {
            let a = graph.vertices[edge.a];
            let b = graph.vertices[edge.b];
            PathElement::new(
                vec![(a.x, a.y), (b.x, b.y)],
                color.mix(EDGE_OPACITY).stroke_width(EDGE_WIDTH),
            )
        }))
        .map_err(|e| render_err(&e))?;

    chart
        .draw_series(
            graph
                .vertices
                .iter()
                .map(|p| Circle::new((p.x, p.y), NODE_RADIUS, NODE_COLOR.filled())),
        )
        .map_err(|e| render_err(&e))?;

    let label_style = ("sans-serif", LABEL_FONT_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(
            graph
                .vertices
                .iter()
                .enumerate()
                .map(|(idx, p)| Text::new(format!("D{}", idx), (p.x, p.y), label_style.clone())),
        )
        .map_err(|e| render_err(&e))?;

    root.present().map_err(|e| render_err(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{Point, TopologyPreset};

    #[test]
    fn canvas_follows_extent() {
        assert_eq!(canvas_size(&TopologyPreset::Grid.build()).unwrap(), (750, 450));
        assert_eq!(canvas_size(&TopologyPreset::Linear.build()).unwrap(), (1350, 1350));
        assert_eq!(canvas_size(&TopologyPreset::Clustered.build()).unwrap(), (600, 600));
    }

    #[test]
    fn canvas_has_minimum_size() {
        let topo = Topology::new("dot", vec![Point::new(0.0, 0.0)], 1.0);
        assert_eq!(canvas_size(&topo).unwrap(), (150, 150));
    }

    #[test]
    fn canvas_side_is_capped() {
        // 218 * 150 = 32700 px, just under the limit
        let edge = Topology::new("edge", vec![Point::new(0.0, 0.0), Point::new(218.0, 1.0)], 1.0);
        assert_eq!(canvas_size(&edge).unwrap(), (32700, 150));

        let far = Topology::new("far", vec![Point::new(0.0, 0.0), Point::new(500.0, 500.0)], 1.0);
        assert!(matches!(canvas_size(&far), Err(TopologyError::Render(_))));
    }

    #[test]
    fn far_away_node_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let far = Topology::new("far", vec![Point::new(0.0, 0.0), Point::new(500.0, 500.0)], 1.0);
        assert!(far.validate().is_ok());

        let err = visualize_network(&far, 1.0, dir.path()).unwrap_err();
        assert!(matches!(err, TopologyError::Render(_)));
        assert!(!image_file_path(dir.path(), "far").exists());
    }

    #[test]
    fn rerender_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let topo = TopologyPreset::Grid.build();

        let path = visualize_network(&topo, 1.0, dir.path()).unwrap();
        assert_eq!(path, image_file_path(dir.path(), "network2"));
        let first = std::fs::read(&path).unwrap();
        assert!(!first.is_empty());

        visualize_network(&topo, 1.0, dir.path()).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn axis_range_widens_degenerate_input() {
        assert_eq!(axis_range([2.0, 2.0].into_iter()), 1.5..2.5);
        assert_eq!(axis_range([0.0, 5.0, 3.0].into_iter()), 0.0..5.0);
        assert_eq!(axis_range(std::iter::empty()), -0.5..0.5);
    }

    #[test]
    fn image_path_uses_topology_name() {
        assert_eq!(image_file_path(Path::new("out"), "network2"), PathBuf::from("out/network2.png"));
    }
}
