//! Vitals Sweep Main Application
//! Main window with control panel and chart viewer, driving the window sweep.

use crate::config::SweepConfig;
use crate::data::{DataLoader, LoaderError, SeriesStore};
use crate::export::WindowExport;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, SweepStatus};
use crate::sweep::WindowScheduler;
use anyhow::Context;
use egui::SidePanel;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Instant;

/// CSV loading result from background thread
#[derive(Debug)]
enum LoadResult {
    Complete { store: SeriesStore, path: PathBuf },
    Error(LoaderError),
}

/// Main application window.
pub struct VitalsApp {
    loader: DataLoader,
    store: SeriesStore,
    scheduler: WindowScheduler,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
}

impl Default for VitalsApp {
    fn default() -> Self {
        Self {
            loader: DataLoader::new(),
            store: SeriesStore::new(),
            scheduler: WindowScheduler::new(SweepConfig::default()),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
        }
    }
}

impl VitalsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            tracing::debug!(path = %path.display(), "file selected");
            self.control_panel.csv_path = Some(path.clone());
            self.loader.select_file(path);
        }
    }

    /// Handle the Load button
    fn handle_load_csv(&mut self) {
        if let Err(e) = self.begin_load() {
            tracing::warn!("load requested without a file");
            Self::alert(&e.to_string());
        }
    }

    /// Read the selected file in the background; parsing follows on completion.
    ///
    /// Nothing changes when no file is selected.
    fn begin_load(&mut self) -> Result<(), LoaderError> {
        if self.load_rx.is_some() {
            return Ok(()); // Already loading
        }

        let path = self.loader.require_file()?.clone();

        self.control_panel.set_status("Reading CSV file...");
        self.control_panel.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match DataLoader::load_readings(&path) {
                Ok(store) => LoadResult::Complete { store, path },
                Err(e) => LoadResult::Error(e),
            };
            let _ = tx.send(result);
        });
        Ok(())
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { store, path }) => {
                tracing::info!(
                    path = %path.display(),
                    readings = store.len(),
                    "readings loaded"
                );
                if store.is_empty() {
                    tracing::warn!(path = %path.display(), "file contains no complete readings");
                }
                self.control_panel
                    .set_status(format!("Loaded {} readings", store.len()));
                self.store = store;
                self.chart_viewer.clear();
                self.scheduler.start(Instant::now());
                self.control_panel.is_loading = false;
            }
            Ok(LoadResult::Error(e)) => {
                tracing::error!("{}", e);
                self.control_panel.set_status(format!("Error: {}", e));
                self.control_panel.is_loading = false;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                tracing::error!("loader thread exited without a result");
                self.control_panel.set_status("Error: loading was interrupted");
                self.control_panel.is_loading = false;
            }
        }
    }

    /// Handle window export
    fn handle_export_window(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("window.json")
            .save_file()
        else {
            return; // User cancelled
        };

        match self.export_window(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "window exported");
                self.control_panel
                    .set_status(format!("Exported window to {}", path.display()));
            }
            Err(e) => {
                tracing::error!("{:#}", e);
                self.control_panel.set_status(format!("Error: {:#}", e));
            }
        }
    }

    fn export_window(&self, path: &Path) -> anyhow::Result<()> {
        let source = self
            .loader
            .file_path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string());

        WindowExport::new(source, self.chart_viewer.current_slice())?
            .write_to(path)
            .with_context(|| format!("exporting window to {}", path.display()))
    }

    /// Blocking user-facing notice.
    fn alert(message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Vitals Sweep")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    /// Advance the sweep if a tick is due and keep frames coming for the next one.
    fn drive_sweep(&mut self, ctx: &egui::Context) {
        let now = Instant::now();

        if let Some((slice, mode)) = self.scheduler.poll(&self.store, now) {
            self.chart_viewer.set_slice(slice, mode);
        }

        if let Some(wait) = self.scheduler.time_until_next_tick(now) {
            ctx.request_repaint_after(wait);
        }

        let (window_start, window_end) = self
            .chart_viewer
            .current_slice()
            .map(|s| (s.start, s.end))
            .unwrap_or_default();
        self.control_panel.sweep = SweepStatus {
            state: self.scheduler.state(),
            readings: self.store.len(),
            window_start,
            window_end,
            ticks: self.scheduler.ticks(),
        };
        self.control_panel.export_enabled = self
            .chart_viewer
            .current_slice()
            .is_some_and(|s| !s.is_empty());
    }
}

impl eframe::App for VitalsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();
        self.drive_sweep(ctx);

        // Request repaint while loading
        if self.load_rx.is_some() {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::LoadCsv => self.handle_load_csv(),
                        ControlPanelAction::StopSweep => {
                            self.scheduler.stop();
                            self.control_panel.set_status("Sweep stopped");
                        }
                        ControlPanelAction::ExportWindow => self.handle_export_window(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
