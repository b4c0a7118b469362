//! Helpers for analysing a simulated BLE mesh network test setup.
//!
//! - [`topology`]: node layouts, the attenuation coefficient file and a drawing
//!   of the links inside the connectivity radius.
//! - [`analyzer`]: per-device latency extraction from tester logs, summary
//!   statistics and a violin plot.

pub mod analyzer;
pub mod common;
pub mod topology;
