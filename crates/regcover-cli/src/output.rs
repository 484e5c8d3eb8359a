//! Result file writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use regcover_solver::CoverageCurve;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Could not write list to '{}': {source}", .path.display())]
    List { path: PathBuf, source: io::Error },

    #[error("Could not write curve to '{}': {source}", .path.display())]
    Curve { path: PathBuf, source: io::Error },

    #[error("Could not write LP model to '{}': {source}", .path.display())]
    Lp { path: PathBuf, source: io::Error },
}

/// Writes one item per line.
pub fn write_list(path: &Path, items: &[String]) -> Result<(), OutputError> {
    let list_error = |source| OutputError::List {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(list_error)?);
    for item in items {
        writeln!(out, "{item}").map_err(list_error)?;
    }
    out.flush().map_err(list_error)
}

pub fn write_lp_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    std::fs::write(path, contents).map_err(|source| OutputError::Lp {
        path: path.to_path_buf(),
        source,
    })
}

/// A curve file opened before the scan starts, so an unwritable path fails
/// without solving anything.
pub struct CurveWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl CurveWriter {
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let file = File::create(path).map_err(|source| OutputError::Curve {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        })
    }

    /// Writes `budget<TAB>covered` lines.
    pub fn write(mut self, curve: &CoverageCurve) -> Result<(), OutputError> {
        let result = curve
            .iter()
            .try_for_each(|point| writeln!(self.out, "{}\t{}", point.budget, point.covered))
            .and_then(|()| self.out.flush());
        result.map_err(|source| OutputError::Curve {
            path: self.path,
            source,
        })
    }
}
