//! CSV Data Loader Module
//! Reads sensor export files and hands their text to the parser.

use crate::data::{parse_readings, SeriesStore};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Please select a CSV file.")]
    NoFileSelected,
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tracks the chosen file and reads it on demand.
#[derive(Default)]
pub struct DataLoader {
    file_path: Option<PathBuf>,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the file picked by the user.
    pub fn select_file(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    /// Get file path.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Path to load, or [`LoaderError::NoFileSelected`] when nothing was picked.
    pub fn require_file(&self) -> Result<&PathBuf, LoaderError> {
        self.file_path.as_ref().ok_or(LoaderError::NoFileSelected)
    }

    /// Read a file as text, replacing invalid UTF-8 sequences.
    pub fn read_file(path: &Path) -> Result<String, LoaderError> {
        let bytes = std::fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read and parse a file in one step.
    pub fn load_readings(path: &Path) -> Result<SeriesStore, LoaderError> {
        let content = Self::read_file(path)?;
        Ok(parse_readings(&content))
    }
}
