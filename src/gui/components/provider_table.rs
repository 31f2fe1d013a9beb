// src/gui/components/provider_table.rs
//
// Spreadsheet-style view of the same rows the cards show.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{data::Provider, present::stars};

// Company, Contact, Email, Phone, Location, Category, Specialty, Service Area, Testimonial, Rating
const WIDTHS: [f32; 10] = [180.0, 130.0, 190.0, 110.0, 130.0, 120.0, 150.0, 150.0, 260.0, 80.0];

pub fn draw(ui: &mut egui::Ui, list: &[&Provider]) {
    egui::ScrollArea::horizontal()
        .id_salt("provider_table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0);
            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    for name in Provider::COLUMNS {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, list.len(), |mut row| {
                        let Some(p) = list.get(row.index()) else { return };
                        let mut cells = p.cells();
                        if let Some(last) = cells.last_mut() {
                            *last = stars(p.rating);
                        }
                        for cell in cells {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                ui.label(RichText::new(cell));
                            });
                        }
                    });
                });
        });
}
