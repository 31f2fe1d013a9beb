// src/gui/components/edit_panel.rs
//
// "How to edit" modal. Escape or a backdrop click closes it, same as the
// Close button. Focus moves to Close when it opens and back to the opener
// when it closes.

use eframe::egui::{self, Id, Modal, RichText};

use crate::{data::Provider, gui::presenter::PanelFocus, intent::Intent};

pub fn draw(ctx: &egui::Context, panel: &mut PanelFocus, intents: &mut Vec<Intent>) {
    let modal = Modal::new(Id::new("edit_panel")).show(ctx, |ui| {
        ui.set_max_width(460.0);
        ui.heading("How to edit the directory");
        ui.add_space(6.0);
        ui.label(
            "Providers come from a shared spreadsheet. Edit the sheet and the \
             directory picks the change up on the next refresh (automatic every \
             ten minutes, or use Refresh).",
        );
        ui.add_space(6.0);
        ui.label(RichText::new("Columns read from the sheet:").strong());
        for (col, note) in SHEET_COLUMNS {
            ui.label(format!("• {col}: {note}"));
        }
        ui.add_space(6.0);
        ui.label(
            RichText::new(format!(
                "Blank company shows as \"{}\"; blank category files under \"Other\".",
                crate::config::consts::COMPANY_PLACEHOLDER
            ))
            .weak(),
        );
        ui.add_space(10.0);

        let close = ui.button("Close");
        if panel.focus_close_pending {
            close.request_focus();
            panel.focus_close_pending = false;
        }
        close.clicked()
    });

    if modal.inner || modal.should_close() {
        logd!("UI: Edit panel closed");
        if let Some(opener) = panel.opener.take() {
            ctx.memory_mut(|m| m.request_focus(opener));
        }
        panel.focus_close_pending = false;
        intents.push(Intent::ClosePanel);
    }
}

const SHEET_COLUMNS: [(&str, &str); 10] = [
    ("Company", "business name"),
    ("Contact", "person to ask for"),
    ("email", "contact address"),
    ("number", "10-digit phone, any punctuation"),
    ("Main Location", "city or area"),
    ("Category", "groups providers in the filter"),
    ("Specialty", "what they do best"),
    ("Service_Area", "where they work"),
    ("Testimonial", "short quote"),
    ("Rating", "1 to 5; anything else counts as 3"),
];

// Same number of sheet columns as provider fields.
const _: () = assert!(SHEET_COLUMNS.len() == Provider::COLUMNS.len());
