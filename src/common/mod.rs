//! Ambient pieces shared by both tools: configuration, error types and logger setup.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AnalyzerConfig, ToolConfig, TopologyConfig};
pub use error::{AnalyzerError, ConfigError, TopologyError};
