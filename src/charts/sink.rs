//! Chart Sink Interface
//! What the renderer needs from a drawing surface, independent of the plotting library.

use crate::config::ChartConfig;

/// How a sink should treat the view when new data arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawMode {
    /// Swap the data and keep the current view, no re-entry animation
    Quiet,
    /// Swap the data and snap the view back to fit it
    Reset,
}

/// One signal's share of a window slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesWindow {
    /// Store index of the first value
    pub start: usize,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Rendering surface for a single signal.
pub trait ChartSink {
    /// Apply creation-time options.
    fn configure(&mut self, config: ChartConfig);

    /// Replace the label axis and data series, then request a redraw.
    fn update(&mut self, window: SeriesWindow, mode: RedrawMode);
}
