use std::path::Path;

use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SwizzleDashApp {
    pub state: AppState,
}

impl SwizzleDashApp {
    /// Load the CSV once at startup. A failed load leaves the table empty
    /// and surfaces the error in the UI instead of crashing.
    pub fn new() -> Self {
        let mut state = AppState::default();
        match loader::load_csv(Path::new(loader::DEFAULT_CSV_PATH)) {
            Ok(table) => {
                log::info!(
                    "Loaded {} posts ({} platforms, {} influencers) from {}",
                    table.len(),
                    table.platforms.len(),
                    table.influencers.len(),
                    loader::DEFAULT_CSV_PATH
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", loader::DEFAULT_CSV_PATH);
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
        Self { state }
    }
}

impl Default for SwizzleDashApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for SwizzleDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: API key + filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::dashboard(ui, &mut self.state);
        });
    }
}
