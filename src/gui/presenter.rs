// src/gui/presenter.rs
//
// egui front end of the Presenter seam. Draws one frame from the ViewModel
// and collects whatever the user did into intents.

use std::convert::Infallible;

use eframe::egui;

use crate::{
    config::state::GuiState,
    intent::Intent,
    present::{Presenter, ViewModel},
};

use super::components::{body, edit_panel, status_bar, toolbar};

/// Focus bookkeeping for the "How to edit" panel.
#[derive(Debug, Default)]
pub struct PanelFocus {
    /// Control that opened the panel; gets focus back on close
    pub opener: Option<egui::Id>,
    /// Move focus into the panel on its first frame
    pub focus_close_pending: bool,
}

pub struct GuiPresenter<'a> {
    pub ctx: &'a egui::Context,
    pub gui: &'a mut GuiState,
    pub notice: &'a mut Option<String>,
    pub panel: &'a mut PanelFocus,
}

impl Presenter for GuiPresenter<'_> {
    type Error = Infallible;

    fn present(&mut self, view: &ViewModel<'_>) -> Result<Vec<Intent>, Infallible> {
        let mut intents = Vec::new();
        let ctx = self.ctx;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::draw(ui, view, self.gui, self.panel, &mut intents);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar::draw(ui, view, self.notice);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            body::draw(ui, view, self.gui, self.notice, &mut intents);
        });

        if view.panel_open {
            edit_panel::draw(ctx, self.panel, &mut intents);
        }

        Ok(intents)
    }
}
