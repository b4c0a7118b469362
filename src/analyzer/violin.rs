//! Violin plot of per-device latency distributions.
//!
//! Each device gets a kernel density outline (Gaussian kernel, Scott's rule
//! bandwidth) mirrored around its x position, extrema and median bars, and a
//! red square at the sample mean annotated with its value.

use log::debug;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;
use std::path::Path;

use super::stats::{round_to_tenth, sample_std_dev};
use super::types::LatencyRecords;
use crate::common::AnalyzerError;

/// File name of the latency plot.
pub const VIOLIN_PLOT_FILE: &str = "mesh_latency_violinplot.png";

const PLOT_SIZE: (u32, u32) = (1200, 800);
const TITLE: &str = "BLE Mesh Network Latency by Device";
/// Density evaluation points per violin.
const KDE_POINTS: usize = 100;
/// Half of the widest violin, in x units.
const MAX_HALF_WIDTH: f64 = 0.25;
/// Half-length of the min/max/median bars, in x units.
const BAR_HALF_WIDTH: f64 = 0.125;
const BODY_COLOR: RGBColor = RGBColor(0xad, 0xd8, 0xe6);
const BODY_OPACITY: f64 = 0.7;
const LINE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const MEAN_MARKER_HALF: i32 = 5;
const ANNOTATION_OFFSET: i32 = 14;

/// Outline of one violin: half-width at each evaluated latency value.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinShape {
    pub ys: Vec<f64>,
    pub half_widths: Vec<f64>,
}

impl ViolinShape {
    /// Samples with no spread collapse to a single flat bar.
    pub fn is_flat(&self) -> bool {
        self.ys.len() < 2
    }
}

/// Scott's rule bandwidth factor, `n^(-1/5)`.
fn scott_factor(n: usize) -> f64 {
    (n as f64).powf(-0.2)
}

/// Gaussian kernel density estimate of `samples` at `y`, with kernel width `sigma`.
pub fn gaussian_kde(samples: &[f64], sigma: f64, y: f64) -> f64 {
    let norm = 1.0 / (samples.len() as f64 * sigma * (2.0 * PI).sqrt());
    samples
        .iter()
        .map(|&x| {
            let z = (y - x) / sigma;
            (-0.5 * z * z).exp()
        })
        .sum::<f64>()
        * norm
}

/// Compute the violin outline for `samples`, or `None` when there are none.
///
/// The density is evaluated at `points` evenly spaced values from the sample
/// minimum to the maximum and scaled so its peak equals `max_half_width`.
pub fn violin_shape(samples: &[u32], points: usize, max_half_width: f64) -> Option<ViolinShape> {
    if samples.is_empty() {
        return None;
    }
    let data: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
    let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sigma = sample_std_dev(&data) * scott_factor(data.len());

    if sigma <= 0.0 || hi <= lo || points < 2 {
        return Some(ViolinShape {
            ys: vec![lo],
            half_widths: vec![max_half_width],
        });
    }

    let step = (hi - lo) / (points - 1) as f64;
    let ys: Vec<f64> = (0..points).map(|i| lo + step * i as f64).collect();
    let densities: Vec<f64> = ys.iter().map(|&y| gaussian_kde(&data, sigma, y)).collect();
    let peak = densities.iter().copied().fold(0.0, f64::max);
    let half_widths = densities.iter().map(|d| d / peak * max_half_width).collect();
    Some(ViolinShape { ys, half_widths })
}

/// Closed outline around x position `center`: right side bottom-up, left side top-down.
fn outline(center: f64, shape: &ViolinShape) -> Vec<(f64, f64)> {
    let right = shape.ys.iter().zip(&shape.half_widths).map(|(&y, &w)| (center + w, y));
    let left = shape
        .ys
        .iter()
        .zip(&shape.half_widths)
        .rev()
        .map(|(&y, &w)| (center - w, y));
    right.chain(left).collect()
}

/// Vertical plot range covering every sample, padded by 10% (at least 0.1 units).
fn latency_range(records: &LatencyRecords) -> std::ops::Range<f64> {
    let (lo, hi) = records
        .values()
        .flat_map(|r| r.samples.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v as f64), hi.max(v as f64))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let range = hi - lo;
    let pad = if range > 1e-6 { 0.1 * range } else { 0.1 * hi.abs().max(1.0) };
    (lo - pad)..(hi + pad)
}

/// Render the violin plot to `<dir>/mesh_latency_violinplot.png`.
pub fn create_violinplot(records: &LatencyRecords, dir: &Path) -> Result<(), AnalyzerError> {
    if records.is_empty() {
        return Err(AnalyzerError::NoRecords);
    }
    let path = dir.join(VIOLIN_PLOT_FILE);
    debug!("Rendering {} violins to {}", records.len(), path.display());

    let render_err = |e: &dyn std::fmt::Display| AnalyzerError::Render(e.to_string());
    let devices: Vec<u32> = records.keys().copied().collect();
    let n = devices.len();

    let root = BitMapBackend::new(&path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(&e))?;

    let device_label = |x: &f64| {
        let pos = x.round();
        if (x - pos).abs() < 1e-6 && pos >= 1.0 && (pos as usize) <= n {
            devices[pos as usize - 1].to_string()
        } else {
            String::new()
        }
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5..(n as f64 + 0.5), latency_range(records))
        .map_err(|e| render_err(&e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n + 1)
        .x_label_formatter(&device_label)
        .x_desc("Device Index")
        .y_desc("Latency (milliseconds)")
        .draw()
        .map_err(|e| render_err(&e))?;

    for (slot, record) in records.values().enumerate() {
        let x = (slot + 1) as f64;
        let Some(stats) = record.stats() else {
            continue;
        };
        let Some(shape) = violin_shape(&record.samples, KDE_POINTS, MAX_HALF_WIDTH) else {
            continue;
        };

        if shape.is_flat() {
            let y = shape.ys[0];
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(x - MAX_HALF_WIDTH, y), (x + MAX_HALF_WIDTH, y)],
                    BODY_COLOR.mix(BODY_OPACITY).stroke_width(3),
                )))
                .map_err(|e| render_err(&e))?;
        } else {
            chart
                .draw_series(std::iter::once(Polygon::new(
                    outline(x, &shape),
                    BODY_COLOR.mix(BODY_OPACITY).filled(),
                )))
                .map_err(|e| render_err(&e))?;
        }

        let (min, max, median) = (stats.min as f64, stats.max as f64, stats.median);
        let bars = [
            vec![(x, min), (x, max)],
            vec![(x - BAR_HALF_WIDTH, min), (x + BAR_HALF_WIDTH, min)],
            vec![(x - BAR_HALF_WIDTH, max), (x + BAR_HALF_WIDTH, max)],
            vec![(x - BAR_HALF_WIDTH, median), (x + BAR_HALF_WIDTH, median)],
        ];
        chart
            .draw_series(bars.into_iter().map(|points| PathElement::new(points, LINE_COLOR.stroke_width(1))))
            .map_err(|e| render_err(&e))?;
    }

    let means: Vec<(f64, f64)> = records
        .values()
        .enumerate()
        .filter_map(|(slot, r)| r.stats().map(|s| ((slot + 1) as f64, s.mean)))
        .collect();

    chart
        .draw_series(means.iter().map(|&(x, mean)| {
            EmptyElement::at((x, mean))
                + Rectangle::new(
                    [
                        (-MEAN_MARKER_HALF, -MEAN_MARKER_HALF),
                        (MEAN_MARKER_HALF, MEAN_MARKER_HALF),
                    ],
                    RED.filled(),
                )
        }))
        .map_err(|e| render_err(&e))?
        .label("Mean")
        .legend(|(x, y)| {
            Rectangle::new(
                [
                    (x - MEAN_MARKER_HALF, y - MEAN_MARKER_HALF),
                    (x + MEAN_MARKER_HALF, y + MEAN_MARKER_HALF),
                ],
                RED.filled(),
            )
        });

    let annotation_style = ("sans-serif", 15.0)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(means.iter().map(|&(x, mean)| {
            EmptyElement::at((x, mean))
                + Text::new(
                    format!("{:.1}", round_to_tenth(mean)),
                    (0, -ANNOTATION_OFFSET),
                    annotation_style.clone(),
                )
        }))
        .map_err(|e| render_err(&e))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| render_err(&e))?;

    root.present().map_err(|e| render_err(&e))?;
    Ok(())
}
