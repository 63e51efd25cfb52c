use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::CellValue;
use crate::data::view::format_count;
use crate::state::AppState;
use crate::ui::{chart, table};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Single-choice dropdown over `values`; returns the newly picked value.
fn value_combo(ui: &mut Ui, id: &str, current: &CellValue, values: &[CellValue]) -> Option<CellValue> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for val in values {
                if ui.selectable_label(val == current, val.to_string()).clicked() {
                    picked = Some(val.clone());
                }
            }
        });
    picked
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(selection) = state.selection.clone() else {
        ui.label("No states or industry classifications in the dataset.");
        return;
    };

    ui.strong("Select State");
    if let Some(v) = value_combo(ui, "state_filter", &selection.state, &state.options.states) {
        state.set_state(v);
    }
    ui.add_space(8.0);

    ui.strong("Select Industry Classification");
    if let Some(v) = value_combo(
        ui,
        "industry_filter",
        &selection.industry,
        &state.options.industries,
    ) {
        state.set_industry(v);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        match state.matching_rows() {
            Some(m) => ui.label(format!("{} rows loaded, {m} matching", state.table.len())),
            None => ui.label(format!("{} rows loaded", state.table.len())),
        };

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – chart, summary, filtered rows
// ---------------------------------------------------------------------------

/// Render the dashboard body for the current view.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.heading(RichText::new("📊 Workers Population Dashboard").size(24.0));
    ui.separator();

    let view = match &state.view {
        Some(Ok(view)) => view,
        Some(Err(e)) => {
            ui.label(RichText::new(e.to_string()).color(Color32::RED).strong());
            return;
        }
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Nothing to show: the dataset has no selectable values.");
            });
            return;
        }
    };

    chart::worker_chart(ui, &view.chart, &state.series_colors, CHART_HEIGHT);
    ui.add_space(8.0);

    ui.heading("📋 Workforce Summary");
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Total Main Workers:");
        ui.label(format_count(view.total_main));
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Total Marginal Workers:");
        ui.label(format_count(view.total_marginal));
    });
    ui.add_space(8.0);

    ui.heading("🔍 Filtered Data");
    table::filtered_rows_table(ui, &state.table, &view.rows);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open workers dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.reload_from(&path);
    }
}
