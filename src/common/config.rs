//! Configuration loading for both tools.
//!
//! Everything is optional: a missing `mesh_tools.toml` yields the built-in
//! defaults, which reproduce the `grid` topology and the embedded sample log.

use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::topology::TopologyPreset;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "mesh_tools.toml";

/// Attenuation assigned to links inside the connectivity radius at its edge.
pub const DEFAULT_MAX_ATTENUATION: f64 = 95.0;

/// Offset from the maximum used for "no link" when no explicit default is set.
pub const OUT_OF_RANGE_OFFSET: f64 = 100.0;

/// Edges shorter than this are drawn with the strongest colour.
pub const DEFAULT_SHORT_RANGE_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ToolConfig {
    pub topology: TopologyConfig,
    pub analyzer: AnalyzerConfig,
}

/// Settings for the attenuation generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TopologyConfig {
    pub preset: TopologyPreset,
    /// JSON scene to load instead of the preset.
    pub scene_file: Option<PathBuf>,
    /// Overrides the preset/scene name (used for output file names).
    pub name: Option<String>,
    /// Overrides the preset/scene connectivity radius.
    pub connectivity_radius: Option<f64>,
    pub max_attenuation: f64,
    /// Defaults to `max_attenuation + 100`.
    pub default_attenuation: Option<f64>,
    pub short_range_threshold: f64,
    pub output_dir: PathBuf,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            preset: TopologyPreset::default(),
            scene_file: None,
            name: None,
            connectivity_radius: None,
            max_attenuation: DEFAULT_MAX_ATTENUATION,
            default_attenuation: None,
            short_range_threshold: DEFAULT_SHORT_RANGE_THRESHOLD,
            output_dir: PathBuf::from("."),
        }
    }
}

impl TopologyConfig {
    pub fn out_of_range_attenuation(&self) -> f64 {
        self.default_attenuation
            .unwrap_or(self.max_attenuation + OUT_OF_RANGE_OFFSET)
    }
}

/// Settings for the latency analyzer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalyzerConfig {
    /// Parse this file instead of the embedded sample log.
    pub log_file: Option<PathBuf>,
}

impl ToolConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ToolConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::load(path)
        } else {
            info!("No {} found, using built-in defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Path of the config file in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let topo = &self.topology;
        if !topo.max_attenuation.is_finite() || topo.max_attenuation < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max-attenuation must be a non-negative number, got {}",
                topo.max_attenuation
            )));
        }
        if !topo.out_of_range_attenuation().is_finite() {
            return Err(ConfigError::Invalid("default-attenuation must be finite".to_string()));
        }
        if let Some(radius) = topo.connectivity_radius {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "connectivity-radius must be positive, got {}",
                    radius
                )));
            }
        }
        if !topo.short_range_threshold.is_finite() || topo.short_range_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "short-range-threshold must be non-negative, got {}",
                topo.short_range_threshold
            )));
        }
        if let Some(name) = &topo.name {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("name must not be empty".to_string()));
            }
        }
        Ok(())
    }
}
