//! Log source selection: a configured log file, or the embedded sample run.

use log::info;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use super::sample_log::SAMPLE_LOG;
use crate::common::AnalyzerError;

/// Return the text to analyse.
///
/// # Parameters
///
/// * `log_file` - Optional path of a captured tester log
///
/// # Returns
///
/// The file content when a path is given, otherwise the embedded sample log.
pub fn load_log(log_file: Option<&Path>) -> Result<Cow<'static, str>, AnalyzerError> {
    match log_file {
        Some(path) => {
            info!("Reading latency log from {}", path.display());
            let content = fs::read_to_string(path).map_err(|source| AnalyzerError::LogRead {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Cow::Owned(content))
        }
        None => {
            info!("No log file configured, using embedded sample log");
            Ok(Cow::Borrowed(SAMPLE_LOG))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sample_log() {
        let content = load_log(None).unwrap();
        assert!(matches!(content, Cow::Borrowed(_)));
        assert!(content.contains("Dev 9 addr 0x000a"));
    }

    #[test]
    fn reads_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        fs::write(&path, "Dev 2 addr 0x0003 avg latency:  7 ms failures 0 # values: 7 7\n").unwrap();
        let content = load_log(Some(&path)).unwrap();
        assert!(content.starts_with("Dev 2"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_log(Some(&dir.path().join("absent.log"))).unwrap_err();
        assert!(matches!(err, AnalyzerError::LogRead { .. }));
    }
}
