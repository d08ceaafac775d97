//! Chart Viewer Widget
//! Central panel stacking the three signal charts above a window summary table.

use crate::charts::{LineChart, RedrawMode, RendererAdapter};
use crate::config::ChartConfig;
use crate::data::WindowSlice;
use crate::stats::{SliceSummary, StatsCalculator, WindowSummary};
use egui::{RichText, ScrollArea};

/// Chart card configuration
const CHART_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 220.0;

/// Scrollable chart display area.
pub struct ChartViewer {
    renderer: RendererAdapter<LineChart>,
    slice: Option<WindowSlice>,
    summary: SliceSummary,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            renderer: RendererAdapter::new(
                LineChart::new("heart_rate_chart", ChartConfig::heart_rate()),
                LineChart::new("gsr_chart", ChartConfig::gsr()),
                LineChart::new("cortisol_chart", ChartConfig::cortisol()),
            ),
            slice: None,
            summary: SliceSummary::default(),
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all charts
    pub fn clear(&mut self) {
        self.renderer.heart_rate.clear();
        self.renderer.gsr.clear();
        self.renderer.cortisol.clear();
        self.slice = None;
        self.summary = SliceSummary::default();
    }

    /// Hand a fresh window to the charts.
    pub fn set_slice(&mut self, slice: WindowSlice, mode: RedrawMode) {
        self.renderer.render(&slice, mode);
        self.summary = StatsCalculator::summarize_slice(&slice);
        self.slice = Some(slice);
    }

    pub fn current_slice(&self) -> Option<&WindowSlice> {
        self.slice.as_ref()
    }

    /// Draw the chart viewer
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.slice.is_none() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for chart in [
                    &mut self.renderer.heart_rate,
                    &mut self.renderer.gsr,
                    &mut self.renderer.cortisol,
                ] {
                    Self::draw_chart_card(ui, chart);
                    ui.add_space(CHART_SPACING);
                }

                Self::draw_summary_table(ui, &self.summary);
            });
    }

    fn draw_chart_card(ui: &mut egui::Ui, chart: &mut LineChart) {
        let line_color = chart.config().line_color;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, line_color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(&chart.config().series_label)
                        .size(16.0)
                        .strong()
                        .color(line_color),
                );
                ui.add_space(6.0);
                chart.show(ui, CHART_HEIGHT);
            });
    }

    fn draw_summary_table(ui: &mut egui::Ui, summary: &SliceSummary) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("window_summary")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["Signal", "N", "Valid", "Mean", "Min", "Max", "Std"] {
                            ui.label(RichText::new(header).strong().size(11.0));
                        }
                        ui.end_row();

                        for (name, stats) in [
                            ("Heart Rate", &summary.heart_rate),
                            ("GSR", &summary.gsr),
                            ("Cortisol", &summary.cortisol),
                        ] {
                            Self::draw_summary_row(ui, name, stats);
                        }
                    });
            });
    }

    fn draw_summary_row(ui: &mut egui::Ui, name: &str, stats: &WindowSummary) {
        ui.label(RichText::new(name).size(11.0));
        ui.label(RichText::new(stats.count.to_string()).size(11.0));
        ui.label(RichText::new(stats.valid.to_string()).size(11.0));
        for value in [stats.mean, stats.min, stats.max, stats.std_dev] {
            ui.label(RichText::new(format_stat(value)).size(11.0));
        }
        ui.end_row();
    }
}

/// Three decimals, `-` when undefined.
fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.3}", value)
    }
}
