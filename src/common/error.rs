//! Error types for configuration, topology generation and log analysis.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading `mesh_tools.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failures while building, writing or drawing a topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("Failed to read scene file {}: {source}", .path.display())]
    SceneRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse scene JSON: {0}")]
    SceneParse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Failed to write attenuation file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to render topology image: {0}")]
    Render(String),
}

/// Failures while reading, parsing or plotting latency logs.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to read log file {}: {source}", .path.display())]
    LogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid {field} value '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("No latency records to plot")]
    NoRecords,
    #[error("Failed to render latency plot: {0}")]
    Render(String),
    #[error("Failed to write latency report: {0}")]
    Io(#[from] io::Error),
}
