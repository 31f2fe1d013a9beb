// src/gui/components/provider_cards.rs
use eframe::egui::{self, RichText};

use crate::{data::Provider, present::stars};

pub fn draw(ui: &mut egui::Ui, list: &[&Provider]) {
    egui::ScrollArea::vertical()
        .id_salt("provider_cards")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for p in list {
                card(ui, p);
                ui.add_space(6.0);
            }
        });
}

fn card(ui: &mut egui::Ui, p: &Provider) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.heading(&p.company);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(stars(p.rating)).color(egui::Color32::from_rgb(0xF0, 0xB4, 0x29)))
                    .on_hover_text(format!("{} of 5", p.rating));
            });
        });
        ui.label(RichText::new(&p.category).weak());

        egui::Grid::new(("card_fields", &p.company, &p.email))
            .num_columns(2)
            .spacing([12.0, 2.0])
            .show(ui, |ui| {
                let fields = [
                    ("Specialty", &p.specialty),
                    ("Contact", &p.contact),
                    ("Phone", &p.phone),
                    ("Email", &p.email),
                    ("Location", &p.location),
                    ("Service area", &p.service_area),
                ];
                for (label, value) in fields.iter().filter(|(_, v)| !v.is_empty()) {
                    ui.label(RichText::new(*label).strong());
                    ui.label(value.as_str());
                    ui.end_row();
                }
            });

        if !p.testimonial.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new(format!("“{}”", p.testimonial)).italics());
        }
    });
}
