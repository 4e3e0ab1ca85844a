use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::DocumentTable;
use crate::data::pivot::{PivotTable, TOTAL};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Overview: country × update pivot
// ---------------------------------------------------------------------------

/// Render the update pivot. The `Total` row and column are bold.
pub fn pivot_table(ui: &mut Ui, pivot: &PivotTable) {
    ui.push_id("update_pivot", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(Column::auto().at_least(140.0))
            .columns(Column::auto().at_least(70.0), pivot.column_labels.len())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("country");
                });
                for label in &pivot.column_labels {
                    header.col(|ui| {
                        ui.strong(label);
                    });
                }
            })
            .body(|mut body| {
                for (label, counts) in pivot.row_labels.iter().zip(&pivot.cells) {
                    let total_row = label == TOTAL;
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(emphasis(label, total_row));
                        });
                        for (count, column) in counts.iter().zip(&pivot.column_labels) {
                            let bold = total_row || column == TOTAL;
                            row.col(|ui| {
                                ui.label(emphasis(&count.to_string(), bold));
                            });
                        }
                    });
                }
            });
    });
}

fn emphasis(text: &str, bold: bool) -> RichText {
    let text = RichText::new(text);
    if bold {
        text.strong()
    } else {
        text
    }
}

// ---------------------------------------------------------------------------
// Detail: filtered raw rows
// ---------------------------------------------------------------------------

/// Render every column of the filtered rows.
pub fn document_table(ui: &mut Ui, table: &DocumentTable) {
    if table.is_empty() {
        ui.label(RichText::new("No documents match the current filters.").italics());
        return;
    }

    ui.push_id("filtered_documents", |ui: &mut Ui| {
        let max_height = ui.available_height();
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(true)
            .max_scroll_height(max_height)
            .columns(Column::auto().at_least(60.0).clip(true), table.column_names.len())
            .header(ROW_HEIGHT, |mut header| {
                for name in &table.column_names {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.len(), |mut row| {
                    let record = &table.records[row.index()];
                    for cell in &record.cells {
                        row.col(|ui| {
                            if cell.is_null() {
                                ui.label(RichText::new(cell.to_string()).color(Color32::GRAY));
                            } else {
                                ui.label(cell.to_string());
                            }
                        });
                    }
                });
            });
    });
}
