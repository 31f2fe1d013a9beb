// src/gui/components/toolbar.rs
//
// Search box, category and sort pickers, Clear / Refresh, and the
// "How to edit" opener. Emits intents only.

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::state::GuiState,
    engine::{CategoryFilter, SortMode},
    gui::presenter::PanelFocus,
    intent::Intent,
    present::ViewModel,
};

pub fn draw(
    ui: &mut egui::Ui,
    view: &ViewModel<'_>,
    gui: &mut GuiState,
    panel: &mut PanelFocus,
    intents: &mut Vec<Intent>,
) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // --- Search ---
        let search = ui.add(
            egui::TextEdit::singleline(&mut gui.search_text)
                .hint_text("Search providers…")
                .desired_width(220.0),
        );
        if search.changed() {
            intents.push(Intent::SearchChanged(gui.search_text.clone()));
        }

        // --- Category ---
        let mut category = view.controls.category.clone();
        egui::ComboBox::from_id_salt("category")
            .selected_text(category.label().to_owned())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut category, CategoryFilter::Any, "All categories");
                for c in &view.categories {
                    ui.selectable_value(&mut category, CategoryFilter::Exact(s!(*c)), *c);
                }
            });
        if category != view.controls.category {
            logf!("UI: Category → {}", category.label());
            intents.push(Intent::CategoryChanged(category));
        }

        // --- Sort ---
        let mut sort = view.controls.sort;
        egui::ComboBox::from_id_salt("sort")
            .selected_text(sort.label())
            .show_ui(ui, |ui| {
                for mode in SortMode::CHOICES {
                    ui.selectable_value(&mut sort, mode, mode.label());
                }
            });
        if sort != view.controls.sort {
            logf!("UI: Sort → {}", sort.key());
            intents.push(Intent::SortChanged(sort));
        }

        if ui.button("Clear filters").clicked() {
            gui.search_text.clear();
            intents.push(Intent::ClearFilters);
        }

        ui.separator();

        if ui.button("⟳ Refresh").clicked() {
            logf!("UI: Refresh clicked");
            intents.push(Intent::Refresh);
        }
        if view.loading {
            ui.add(Spinner::new());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let help = ui.button("How to edit");
            if help.clicked() && !view.panel_open {
                panel.opener = Some(help.id);
                panel.focus_close_pending = true;
                intents.push(Intent::OpenPanel);
            }
        });
    });
}
