use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::WorkerTable;

/// Render the given rows of `table` with every column, cells as loaded.
pub fn filtered_rows_table(ui: &mut Ui, table: &WorkerTable, rows: &[usize]) {
    let n_cols = table.columns.len();
    if rows.is_empty() {
        ui.label("No rows match the current filters.");
        return;
    }

    let text_height = ui.text_style_height(&egui::TextStyle::Body);
    let row_height = text_height + 4.0;

    egui::ScrollArea::horizontal()
        .id_salt("filtered_rows_hscroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(
                    Column::initial(140.0).at_least(60.0).clip(true).resizable(true),
                    n_cols,
                )
                .header(row_height + 4.0, |mut header| {
                    for name in &table.columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(row_height, rows.len(), |mut row| {
                        let table_row = rows[row.index()];
                        for col in 0..n_cols {
                            row.col(|ui: &mut Ui| {
                                ui.label(table.cell(table_row, col).to_string());
                            });
                        }
                    });
                });
        });
}
