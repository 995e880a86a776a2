// src/gui/actions/copy.rs
use eframe::egui;
use log::{debug, error, info};

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let rows = super::visible_rows(app);
    if rows.is_empty() {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let format = app.state.options.export.format;
    match file::to_export_string(format, &rows) {
        Ok(txt) => {
            info!("Copy: format={:?}, rows={}", format, rows.len());
            ui_ctx.copy_text(txt);
            app.status(format!("Copied {} course(s) to clipboard", rows.len()));
        }
        Err(e) => {
            error!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
