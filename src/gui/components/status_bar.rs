// src/gui/components/status_bar.rs
use eframe::egui::{self, RichText};

use crate::present::{LoadStatus, ViewModel};

pub fn draw(ui: &mut egui::Ui, view: &ViewModel<'_>, notice: &Option<String>) {
    ui.horizontal(|ui| {
        let line = RichText::new(view.status_line());
        let line = match view.status {
            LoadStatus::Error(_) => line.color(ui.visuals().error_fg_color),
            _ => line,
        };
        ui.label(line);

        if let Some(msg) = notice {
            ui.separator();
            ui.label(RichText::new(msg).weak());
        }
    });
}
