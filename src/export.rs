//! Report export to text files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const FACTORY_REPORT_FILENAME: &str = "ai-datacenter-cost-analysis.txt";
pub const MANPOWER_REPORT_FILENAME: &str = "ai-manpower-cost-analysis.txt";
pub const ROBOT_REPORT_FILENAME: &str = "ai-robot-cost-analysis.txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export directory {0} does not exist")]
    MissingDirectory(PathBuf),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Write a rendered report into `dir` under its canonical file name.
/// Returns the path of the written file.
pub fn write_report(dir: &Path, filename: &str, report: &str) -> Result<PathBuf, ExportError> {
    if !dir.is_dir() {
        return Err(ExportError::MissingDirectory(dir.to_path_buf()));
    }
    let path = dir.join(filename);
    fs::write(&path, report)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{report, robot};

    #[test]
    fn writes_report_under_canonical_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = robot::RobotConfig::default();
        let breakdown = robot::calculate(&config);
        let text = report::robot_report(&config, &breakdown);

        let path = write_report(dir.path(), ROBOT_REPORT_FILENAME, &text).unwrap();
        assert_eq!(path.file_name().unwrap(), "ai-robot-cost-analysis.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_report(&missing, FACTORY_REPORT_FILENAME, "x").unwrap_err();
        assert!(matches!(err, ExportError::MissingDirectory(_)));
    }
}
