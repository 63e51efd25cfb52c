use std::sync::Arc;

use eframe::egui;

use crate::data::model::WorkerTable;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WorkforceApp {
    pub state: AppState,
    side_panel_width: f32,
}

impl WorkforceApp {
    pub fn new(table: Arc<WorkerTable>, side_panel_width: f32) -> Self {
        Self {
            state: AppState::new(table),
            side_panel_width,
        }
    }
}

impl eframe::App for WorkforceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(self.side_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart, summary, rows ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::dashboard(ui, &self.state);
        });
    }
}
