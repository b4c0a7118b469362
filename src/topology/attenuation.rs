//! Distance to attenuation mapping.
//!
//! The mapping is a plain linear scale, not a path-loss model:
//!
//! ```text
//! att(d) = max_attenuation * d / radius   for d <= radius
//! att(d) = out_of_range                   for d >  radius
//! ```

use super::geometry::distance;
use super::types::Point;

/// Constants of the linear attenuation scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationParams {
    /// Maximum distance at which two nodes are linked.
    pub connectivity_radius: f64,
    /// Attenuation reached exactly at the connectivity radius.
    pub max_attenuation: f64,
    /// Attenuation used beyond the radius, meaning "no usable link".
    pub out_of_range: f64,
}

impl AttenuationParams {
    /// Attenuation for a link of length `distance`.
    pub fn attenuation_at(&self, distance: f64) -> f64 {
        if distance > self.connectivity_radius {
            return self.out_of_range;
        }
        self.max_attenuation * (distance / self.connectivity_radius)
    }
}

/// Attenuation between two node positions.
pub fn calculate_attenuation(node1: &Point, node2: &Point, params: &AttenuationParams) -> f64 {
    params.attenuation_at(distance(node1, node2))
}
