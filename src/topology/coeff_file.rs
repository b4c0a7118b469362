//! Attenuation coefficient file writer.
//!
//! One directed pair per line, both directions for every unordered pair:
//!
//! ```text
//! 0 1: 32.76 # Node0 to Node1 attenuation in dBm
//! 1 0: 32.76 # Node1 to Node0 attenuation in dBm
//! ```

use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::attenuation::{AttenuationParams, calculate_attenuation};
use super::types::{Point, Topology};
use crate::common::TopologyError;

/// Suffix appended to the topology name for the coefficient file.
pub const COEFF_FILE_SUFFIX: &str = "_att_file.coeff";

/// Location of the coefficient file for `topology_name` inside `output_dir`.
pub fn coeff_file_path(output_dir: &Path, topology_name: &str) -> PathBuf {
    output_dir.join(format!("{}{}", topology_name, COEFF_FILE_SUFFIX))
}

/// Format a single directed line, including the trailing newline.
pub fn format_line(from: usize, to: usize, attenuation: f64) -> String {
    format!(
        "{} {}: {:.2} # Node{} to Node{} attenuation in dBm\n",
        from, to, attenuation, from, to
    )
}

/// Write both directions of every unordered pair to `out`, copying each line to `echo`.
///
/// Pairs are visited with `i < j` in ascending order; for each pair `i j` is
/// written before `j i`, and both carry the same value.
///
/// # Returns
///
/// The number of lines written, `n * (n - 1)` for `n` nodes.
pub fn write_attenuation_lines<W: Write, E: Write>(
    out: &mut W,
    echo: &mut E,
    nodes: &[Point],
    params: &AttenuationParams,
) -> io::Result<usize> {
    let mut lines = 0;
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let attenuation = calculate_attenuation(&nodes[i], &nodes[j], params);
            for (from, to) in [(i, j), (j, i)] {
                let line = format_line(from, to, attenuation);
                out.write_all(line.as_bytes())?;
                echo.write_all(line.as_bytes())?;
                lines += 1;
            }
        }
    }
    Ok(lines)
}

/// Create (or overwrite) `<output_dir>/<name>_att_file.coeff` for the topology,
/// echoing every line to stdout.
pub fn generate_attenuation_file(
    topology: &Topology,
    params: &AttenuationParams,
    output_dir: &Path,
) -> Result<PathBuf, TopologyError> {
    let path = coeff_file_path(output_dir, &topology.name);
    let mut writer = BufWriter::new(File::create(&path)?);
    let stdout = io::stdout();
    let mut echo = stdout.lock();

    let lines = write_attenuation_lines(&mut writer, &mut echo, &topology.nodes, params)?;
    writer.flush()?;
    echo.flush()?;

    info!(
        "Wrote {} attenuation entries for {} nodes to {}",
        lines,
        topology.node_count(),
        path.display()
    );
    Ok(path)
}
