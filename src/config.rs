//! Application Configuration
//! Fixed sweep cadence, window geometry and per-signal chart presets.

use egui::Color32;
use std::time::Duration;

/// Number of readings visible at once
pub const WINDOW_SIZE: usize = 70;
/// Readings the window moves per tick
pub const SHIFT_SIZE: usize = 1;
/// Delay between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Fields a data row must split into
pub const FIELDS_PER_ROW: usize = 7;
pub const HEART_RATE_FIELD: usize = 2;
pub const GSR_FIELD: usize = 3;
pub const CORTISOL_FIELD: usize = 6;

/// Timing and geometry of the moving window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub window_size: usize,
    pub shift_size: usize,
    pub tick_interval: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            shift_size: SHIFT_SIZE,
            tick_interval: TICK_INTERVAL,
        }
    }
}

/// Closed vertical range pinned on a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Creation-time options for one chart sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub series_label: String,
    pub line_color: Color32,
    pub fill_color: Color32,
    pub fixed_y_axis: Option<AxisRange>,
    pub y_axis_title: String,
}

impl ChartConfig {
    pub fn heart_rate() -> Self {
        Self {
            series_label: "Heart Rate (BPM)".to_string(),
            line_color: Color32::RED,
            fill_color: Color32::from_rgba_unmultiplied(255, 0, 0, 51),
            fixed_y_axis: None,
            y_axis_title: "Value".to_string(),
        }
    }

    pub fn gsr() -> Self {
        Self {
            series_label: "GSR (µS)".to_string(),
            line_color: Color32::BLUE,
            fill_color: Color32::from_rgba_unmultiplied(0, 0, 255, 51),
            fixed_y_axis: None,
            y_axis_title: "Value".to_string(),
        }
    }

    /// Cortisol readings are displayed on a pinned `0..2` scale.
    pub fn cortisol() -> Self {
        Self {
            series_label: "Cortisol (µg/dL)".to_string(),
            line_color: Color32::from_rgb(128, 0, 128),
            fill_color: Color32::from_rgba_unmultiplied(128, 0, 128, 51),
            fixed_y_axis: Some(AxisRange { min: 0.0, max: 2.0 }),
            y_axis_title: "Cortisol Level".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep() {
        let config = SweepConfig::default();
        assert_eq!(config.window_size, 70);
        assert_eq!(config.shift_size, 1);
        assert_eq!(config.tick_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_only_cortisol_is_pinned() {
        assert!(ChartConfig::heart_rate().fixed_y_axis.is_none());
        assert!(ChartConfig::gsr().fixed_y_axis.is_none());
        assert_eq!(
            ChartConfig::cortisol().fixed_y_axis,
            Some(AxisRange { min: 0.0, max: 2.0 })
        );
    }
}
