// src/gui/actions/copy.rs
use eframe::egui;

use crate::{data::Provider, delimited};

/// Visible rows, as shown, to the clipboard as TSV with a header row.
pub fn copy(ctx: &egui::Context, list: &[&Provider], notice: &mut Option<String>) {
    if list.is_empty() {
        *notice = Some(s!("Nothing to copy"));
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = delimited::to_export_string(list.iter().copied(), '\t', true);
    logf!("Copy: rows={}, bytes={}", list.len(), txt.len());

    ctx.copy_text(txt);
    *notice = Some(format!("Copied {} providers to clipboard", list.len()));
}
