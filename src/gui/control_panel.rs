//! Control Panel Widget
//! Left side panel with file selection, loading and sweep status.

use crate::sweep::SchedulerState;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// What the panel shows about the running sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepStatus {
    pub state: SchedulerState,
    pub readings: usize,
    pub window_start: usize,
    pub window_end: usize,
    pub ticks: u64,
}

impl Default for SweepStatus {
    fn default() -> Self {
        Self {
            state: SchedulerState::Idle,
            readings: 0,
            window_start: 0,
            window_end: 0,
            ticks: 0,
        }
    }
}

impl SweepStatus {
    /// Human readable window position, e.g. `Readings 11-80 of 200`.
    pub fn window_text(&self) -> String {
        if self.window_end == self.window_start {
            "No readings in view".to_string()
        } else {
            format!(
                "Readings {}-{} of {}",
                self.window_start + 1,
                self.window_end,
                self.readings
            )
        }
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    pub sweep: SweepStatus,
    pub status: String,
    pub is_loading: bool,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            sweep: SweepStatus::default(),
            status: "Ready".to_string(),
            is_loading: false,
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🩺 Vitals Sweep")
                    .size(22.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
            ui.label(
                RichText::new("Heart rate · GSR · Cortisol")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    let path_color = if self.csv_path.is_some() {
                        ui.visuals().text_color()
                    } else {
                        Color32::GRAY
                    };
                    ui.label(RichText::new(&path_text).size(12.0).color(path_color));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(!self.is_loading, |ui| {
                let button = egui::Button::new(RichText::new("▶ Load Readings").size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::LoadCsv;
                }
            });

            ui.add_space(8.0);

            ui.add_enabled_ui(self.sweep.state == SchedulerState::Running, |ui| {
                let stop_button = egui::Button::new(RichText::new("⏹ Stop Sweep").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(stop_button).clicked() {
                    action = ControlPanelAction::StopSweep;
                }
            });

            ui.add_space(8.0);

            ui.add_enabled_ui(self.export_enabled, |ui| {
                let export_button =
                    egui::Button::new(RichText::new("💾 Export Window").size(14.0))
                        .min_size(egui::vec2(150.0, 30.0));
                if ui.add(export_button).clicked() {
                    action = ControlPanelAction::ExportWindow;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Sweep Section =====
        ui.label(RichText::new("⏱ Sweep").size(14.0).strong());
        ui.add_space(5.0);

        let (state_text, state_color) = match self.sweep.state {
            SchedulerState::Running => ("Running", Color32::from_rgb(40, 167, 69)),
            SchedulerState::Idle => ("Idle", Color32::GRAY),
        };
        egui::Grid::new("sweep_status")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("State:");
                ui.label(RichText::new(state_text).color(state_color));
                ui.end_row();

                ui.label("Loaded:");
                ui.label(format!("{} readings", self.sweep.readings));
                ui.end_row();

                ui.label("Window:");
                ui.label(self.sweep.window_text());
                ui.end_row();

                ui.label("Ticks:");
                ui.label(self.sweep.ticks.to_string());
                ui.end_row();
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        if self.is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }

        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.starts_with("Loaded") || self.status.starts_with("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set status
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    LoadCsv,
    StopSweep,
    ExportWindow,
}
