// src/gui/components/export_bar.rs

use eframe::egui;
use log::{debug, info};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);

    // --- Format ---
    let prev_fmt = app.state.options.export.format;
    let mut fmt = prev_fmt;
    ui.horizontal(|ui| {
        ui.label("Format:");
        for f in [ExportFormat::Html, ExportFormat::Csv, ExportFormat::Text] {
            ui.selectable_value(&mut fmt, f, f.label());
        }

        if fmt != prev_fmt {
            let export = &mut app.state.options.export;
            export.format = fmt;
            info!("UI: Export format → {:?}", export.format);

            // Keep the text box in step with the extension unless the user typed a path
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.separator();

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions + status ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        ui.separator();
        ui.label(format!("Status: {}", app.status));
    });

    ui.add_space(4.0);
}
