//! Renderer Adapter
//! Fans a window slice out to the heart rate, GSR and cortisol sinks.

use crate::charts::{ChartSink, RedrawMode, SeriesWindow};
use crate::config::ChartConfig;
use crate::data::WindowSlice;

/// The three signal charts, configured once at creation.
pub struct RendererAdapter<S: ChartSink> {
    pub heart_rate: S,
    pub gsr: S,
    pub cortisol: S,
}

impl<S: ChartSink> RendererAdapter<S> {
    pub fn new(mut heart_rate: S, mut gsr: S, mut cortisol: S) -> Self {
        heart_rate.configure(ChartConfig::heart_rate());
        gsr.configure(ChartConfig::gsr());
        cortisol.configure(ChartConfig::cortisol());

        Self {
            heart_rate,
            gsr,
            cortisol,
        }
    }

    /// Push one slice to every chart. Drawing problems stay with the sink.
    pub fn render(&mut self, slice: &WindowSlice, mode: RedrawMode) {
        let series = |values: &[f64]| SeriesWindow {
            start: slice.start,
            labels: slice.labels.clone(),
            values: values.to_vec(),
        };

        self.heart_rate.update(series(&slice.heart_rate), mode);
        self.gsr.update(series(&slice.gsr), mode);
        self.cortisol.update(series(&slice.cortisol), mode);
    }
}
