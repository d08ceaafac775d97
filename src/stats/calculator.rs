//! Statistics Calculator Module
//! Descriptive statistics for the readings currently in view.

use crate::data::WindowSlice;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Summary of one signal over a window.
///
/// Only finite values are counted; undefined figures are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowSummary {
    /// Readings in the window
    pub count: usize,
    /// Readings with a finite value
    pub valid: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

impl Default for WindowSummary {
    fn default() -> Self {
        Self {
            count: 0,
            valid: 0,
            mean: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            std_dev: f64::NAN,
        }
    }
}

/// Summaries for the three signals of one slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SliceSummary {
    pub heart_rate: WindowSummary,
    pub gsr: WindowSummary,
    pub cortisol: WindowSummary,
}

/// Computes window statistics.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Summarise a single series.
    pub fn summarize(values: &[f64]) -> WindowSummary {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return WindowSummary {
                count: values.len(),
                ..WindowSummary::default()
            };
        }

        WindowSummary {
            count: values.len(),
            valid: finite.len(),
            mean: finite.iter().mean(),
            min: Statistics::min(finite.iter()),
            max: Statistics::max(finite.iter()),
            // sample deviation, NaN below two points
            std_dev: finite.iter().std_dev(),
        }
    }

    /// Summarise every signal of a slice.
    pub fn summarize_slice(slice: &WindowSlice) -> SliceSummary {
        SliceSummary {
            heart_rate: Self::summarize(&slice.heart_rate),
            gsr: Self::summarize(&slice.gsr),
            cortisol: Self::summarize(&slice.cortisol),
        }
    }
}
