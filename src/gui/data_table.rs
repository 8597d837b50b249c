//! Data Table Widget
//! Striped preview grid of the most relevant booking columns.

use crate::stats::{TablePreview, PREVIEW_COLUMNS};
use egui::{RichText, ScrollArea};

const TABLE_HEIGHT: f32 = 420.0;

/// Scrollable preview of the first rows of the prepared table.
pub struct DataTable;

impl DataTable {
    pub fn show(ui: &mut egui::Ui, preview: &TablePreview) {
        if preview.rows.is_empty() {
            ui.label(RichText::new("No Data").size(14.0));
            return;
        }

        ScrollArea::vertical()
            .id_salt("booking_preview_scroll")
            .max_height(TABLE_HEIGHT)
            .show(ui, |ui| {
                egui::Grid::new("booking_preview")
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([14.0, 4.0])
                    .show(ui, |ui| {
                        for name in PREVIEW_COLUMNS {
                            ui.label(RichText::new(name).strong().size(12.0));
                        }
                        ui.end_row();

                        for row in &preview.rows {
                            for cell in row {
                                ui.label(RichText::new(cell).size(12.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
