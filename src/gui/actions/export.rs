// src/gui/actions/export.rs
use log::{debug, error, info};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    let rows = super::visible_rows(app);
    if rows.is_empty() {
        app.status("Nothing to export");
        debug!("Export: Clicked, but there's nothing to export");
        return;
    }

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        info!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    let export = &app.state.options.export;
    info!("Export: Begin format={:?}, rows={}", export.format, rows.len());

    match file::write_export(export, &rows) {
        Ok(path) => {
            info!("Export: OK {}", path.display());
            app.status(format!("Exported {} course(s) to {}", rows.len(), path.display()));
        }
        Err(e) => {
            error!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
