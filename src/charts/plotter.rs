//! Chart Plotter Module
//! Line chart sink drawn with egui_plot.

use crate::charts::{ChartSink, RedrawMode, SeriesWindow};
use crate::config::ChartConfig;
use egui::Stroke;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotBounds, PlotPoints};

/// Line chart with a filled area under the curve.
pub struct LineChart {
    id: String,
    config: ChartConfig,
    window: SeriesWindow,
    reset_view: bool,
}

impl LineChart {
    pub fn new(id: impl Into<String>, config: ChartConfig) -> Self {
        Self {
            id: id.into(),
            config,
            window: SeriesWindow::default(),
            reset_view: false,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn window(&self) -> &SeriesWindow {
        &self.window
    }

    /// Drop the current series.
    pub fn clear(&mut self) {
        self.window = SeriesWindow::default();
        self.reset_view = true;
    }

    /// Draw the chart into `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui, height: f32) {
        let labels = self.window.labels.clone();
        let start = self.window.start;

        let mut plot = Plot::new(&self.id)
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Time")
            .y_axis_label(self.config.y_axis_title.clone())
            .x_axis_formatter(move |mark, _range| axis_label(&labels, start, mark.value));

        if std::mem::take(&mut self.reset_view) {
            plot = plot.reset();
        }

        let fixed = self.config.fixed_y_axis;
        if fixed.is_some() {
            plot = plot.allow_zoom(false).allow_drag(false);
        }

        let name = self.config.series_label.clone();
        let line_color = self.config.line_color;
        let fill_color = self.config.fill_color;
        let floor = fixed
            .map(|axis| axis.min)
            .unwrap_or_else(|| finite_min(&self.window.values));

        // Line::fill would tint with the line colour; bars carry the configured fill.
        let bars: Vec<Bar> = self
            .window
            .values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| {
                Bar::new((start + i) as f64, v - floor)
                    .base_offset(floor)
                    .width(1.0)
                    .fill(fill_color)
                    .stroke(Stroke::NONE)
            })
            .collect();
        let segments = finite_segments(start, &self.window.values);
        let count = self.window.values.len();

        plot.show(ui, |plot_ui| {
            if let Some(axis) = fixed {
                let (x_min, x_max) = x_extent(start, count);
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [x_min, axis.min],
                    [x_max, axis.max],
                ));
            }

            plot_ui.bar_chart(BarChart::new(bars).name(&name));

            for segment in segments {
                plot_ui.line(
                    Line::new(PlotPoints::from(segment))
                        .color(line_color)
                        .width(2.0)
                        .name(&name),
                );
            }
        });
    }
}

impl ChartSink for LineChart {
    fn configure(&mut self, config: ChartConfig) {
        self.config = config;
        self.reset_view = true;
    }

    fn update(&mut self, window: SeriesWindow, mode: RedrawMode) {
        self.window = window;
        if mode == RedrawMode::Reset {
            self.reset_view = true;
        }
    }
}

/// Label for a grid mark; only whole positions inside the window get one.
fn axis_label(labels: &[String], start: usize, value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < start as f64 {
        return String::new();
    }
    labels
        .get(rounded as usize - start)
        .cloned()
        .unwrap_or_default()
}

/// Split a series into runs of finite points so `NaN` cells show as gaps.
fn finite_segments(start: usize, values: &[f64]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (i, &v) in values.iter().enumerate() {
        if v.is_finite() {
            current.push([(start + i) as f64, v]);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Smallest finite value, 0 for an all-gap series.
fn finite_min(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))))
        .unwrap_or(0.0)
}

/// Horizontal bounds covering every bar of the window.
fn x_extent(start: usize, count: usize) -> (f64, f64) {
    let first = start as f64 - 0.5;
    (first, first + count.max(1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(range: std::ops::Range<usize>) -> Vec<String> {
        range.map(|i| format!("Reading {}", i + 1)).collect()
    }

    #[test]
    fn test_axis_label_lookup() {
        let labels = labels(10..80);

        assert_eq!(axis_label(&labels, 10, 10.0), "Reading 11");
        assert_eq!(axis_label(&labels, 10, 79.0), "Reading 80");
        assert_eq!(axis_label(&labels, 10, 80.0), "");
        assert_eq!(axis_label(&labels, 10, 9.0), "");
        assert_eq!(axis_label(&labels, 10, 12.5), "");
        assert_eq!(axis_label(&labels, 10, -3.0), "");
    }

    #[test]
    fn test_segments_break_on_nan() {
        let segments = finite_segments(5, &[1.0, f64::NAN, 2.0, 3.0, f64::NAN]);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![[5.0, 1.0]]);
        assert_eq!(segments[1], vec![[7.0, 2.0], [8.0, 3.0]]);
    }

    #[test]
    fn test_segments_of_empty_series() {
        assert!(finite_segments(0, &[]).is_empty());
        assert!(finite_segments(0, &[f64::NAN, f64::NAN]).is_empty());
    }

    #[test]
    fn test_finite_min_ignores_gaps() {
        assert_eq!(finite_min(&[3.0, f64::NAN, 1.5, 2.0]), 1.5);
        assert_eq!(finite_min(&[f64::NAN]), 0.0);
    }

    #[test]
    fn test_x_extent() {
        assert_eq!(x_extent(10, 70), (9.5, 79.5));
        assert_eq!(x_extent(0, 0), (-0.5, 0.5));
    }

    #[test]
    fn test_new_chart_uses_given_config() {
        let chart = LineChart::new("gsr", ChartConfig::gsr());

        assert_eq!(chart.config().series_label, "GSR (µS)");
        assert_eq!(chart.config().fill_color, ChartConfig::gsr().fill_color);
        assert!(chart.window().values.is_empty());
        assert!(!chart.reset_view);
    }

    #[test]
    fn test_update_tracks_reset() {
        let mut chart = LineChart::new("hr", ChartConfig::heart_rate());
        chart.configure(ChartConfig::cortisol());
        assert!(chart.reset_view);
        chart.reset_view = false;

        let window = SeriesWindow {
            start: 3,
            labels: labels(3..5),
            values: vec![0.4, 0.5],
        };
        chart.update(window.clone(), RedrawMode::Quiet);
        assert!(!chart.reset_view);
        assert_eq!(chart.window(), &window);

        chart.update(window, RedrawMode::Reset);
        assert!(chart.reset_view);
        assert_eq!(chart.config().series_label, "Cortisol (µg/dL)");
    }
}
