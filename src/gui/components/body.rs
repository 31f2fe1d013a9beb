// src/gui/components/body.rs
//
// Main area: exactly one of loading / error / empty / provider list.

use eframe::egui::{self, RichText, widgets::Spinner};

use crate::{
    config::state::{GuiState, ViewMode},
    gui::actions::copy,
    intent::Intent,
    present::{Body, ViewModel},
};

use super::{provider_cards, provider_table, tabs};

pub fn draw(
    ui: &mut egui::Ui,
    view: &ViewModel<'_>,
    gui: &mut GuiState,
    notice: &mut Option<String>,
    intents: &mut Vec<Intent>,
) {
    match view.body() {
        Body::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(Spinner::new().size(28.0));
                ui.label("Loading providers…");
            });
        }
        Body::Error(msg) => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("Could not load providers").strong().color(ui.visuals().error_fg_color));
                ui.label(msg);
                ui.add_space(8.0);
                if ui.button("Retry").clicked() {
                    logf!("UI: Retry clicked");
                    intents.push(Intent::Retry);
                }
            });
        }
        Body::Empty => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No providers match the current filters.");
                if view.total > 0 && ui.button("Clear filters").clicked() {
                    gui.search_text.clear();
                    intents.push(Intent::ClearFilters);
                }
            });
        }
        Body::Providers(list) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new(view.count_label()).strong());
                ui.separator();
                tabs::draw(ui, gui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Copy as TSV").clicked() {
                        copy::copy(ui.ctx(), list, notice);
                    }
                });
            });
            ui.separator();

            match gui.view_mode {
                ViewMode::Cards => provider_cards::draw(ui, list),
                ViewMode::Table => provider_table::draw(ui, list),
            }
        }
    }
}
