// src/gui/components/filter_bar.rs
//
// Search box, Department/Term dropdowns, Refresh and view toggle.
// Each widget change maps to one controller Event; nothing else reacts.

use eframe::egui;
use log::debug;

use crate::{
    config::{
        consts::{ALL_DEPARTMENTS, ALL_TERMS},
        state::ViewMode,
    },
    controller::Event,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut events: Vec<Event> = Vec::new();

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search)
                .hint_text("Course, description or instructor")
                .desired_width(280.0),
        );
        if resp.changed() {
            events.push(Event::SearchInput);
        }

        if dropdown(
            ui,
            "department",
            ALL_DEPARTMENTS,
            &mut app.state.gui.department,
            &app.ctl.filter_options().departments,
        ) {
            debug!("UI: Department → {:?}", app.state.gui.department);
            events.push(Event::DepartmentChange);
        }

        if dropdown(
            ui,
            "term",
            ALL_TERMS,
            &mut app.state.gui.term,
            &app.ctl.filter_options().terms,
        ) {
            debug!("UI: Term → {:?}", app.state.gui.term);
            events.push(Event::TermChange);
        }

        let loading = app.is_loading();
        let refresh = ui.add_enabled(!loading, egui::Button::new("Refresh"));
        if refresh.clicked() {
            events.push(Event::Refresh);
        }
        if loading {
            ui.add(egui::Spinner::new());
        }

        ui.separator();
        ui.selectable_value(&mut app.state.gui.view, ViewMode::Cards, "Cards");
        ui.selectable_value(&mut app.state.gui.view, ViewMode::Table, "Table");
    });
    ui.add_space(4.0);

    let ctx = ui.ctx().clone();
    for ev in events {
        app.dispatch(ev, &ctx);
    }
}

/// Combo box with an "All …" entry (empty value) followed by `values`.
/// Returns true when the selection changed.
fn dropdown(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    selected: &mut String,
    values: &[String],
) -> bool {
    let shown = if selected.is_empty() { all_label.to_string() } else { selected.clone() };
    let mut changed = false;

    egui::ComboBox::from_id_salt(id)
        .selected_text(shown)
        .width(160.0)
        .show_ui(ui, |ui| {
            changed |= ui.selectable_value(selected, String::new(), all_label).changed();
            for v in values {
                changed |= ui.selectable_value(selected, v.clone(), v.as_str()).changed();
            }
        });

    changed
}
