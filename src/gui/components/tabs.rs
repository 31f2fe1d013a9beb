// src/gui/components/tabs.rs
//
// Cards / Table switch. Purely presentational: both tabs show the same rows.

use eframe::egui;

use crate::config::state::{GuiState, ViewMode};

pub fn draw(ui: &mut egui::Ui, gui: &mut GuiState) {
    ui.horizontal(|ui| {
        for mode in ViewMode::ALL {
            let selected = gui.view_mode == mode;
            if ui.selectable_label(selected, mode.title()).clicked() && !selected {
                logd!("UI: Tab switch {:?} → {:?}", gui.view_mode, mode);
                gui.view_mode = mode;
            }
        }
    });
}
