// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs

pub use copy::copy;
pub use export::export;

use crate::{catalog::Row, gui::app::App};

/// Rows currently on screen, materialized for clipboard/file boundaries.
#[inline]
pub(super) fn visible_rows(app: &App) -> Vec<Row> {
    app.ctl.view(&app.state.gui.controls()).to_owned_rows()
}
