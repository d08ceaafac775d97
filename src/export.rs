//! Window Export Module
//! Writes the readings currently in view, with their summaries, as JSON.
//!
//! Non-finite readings are written as `null`.

use crate::data::WindowSlice;
use crate::stats::{SliceSummary, StatsCalculator};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No window to export yet")]
    NothingToExport,
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot of one window.
#[derive(Debug, Clone, Serialize)]
pub struct WindowExport {
    pub source: Option<String>,
    pub window: WindowSlice,
    pub summary: SliceSummary,
}

impl WindowExport {
    pub fn new(source: Option<String>, slice: Option<&WindowSlice>) -> Result<Self, ExportError> {
        let window = slice.cloned().ok_or(ExportError::NothingToExport)?;
        let summary = StatsCalculator::summarize_slice(&window);
        Ok(Self {
            source,
            window,
            summary,
        })
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
