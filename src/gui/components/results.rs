// src/gui/components/results.rs
//
// Draws the results area from the controller's rendered fragments (cards),
// or the filtered rows as a compact table. Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    catalog::COLUMNS,
    config::{consts::LINK_LABEL, state::ViewMode},
    controller::LoadState,
    gui::app::App,
    render::{Card, Fragment},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.ctl.state() == LoadState::Empty || app.ctl.output().fragments().is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Loading…");
        });
        return;
    }

    // Load errors always replace the results, whatever the view mode
    if app.ctl.output().is_load_error() || app.state.gui.view == ViewMode::Cards {
        draw_cards(ui, app);
    } else {
        draw_table(ui, app);
    }
}

fn draw_cards(ui: &mut egui::Ui, app: &App) {
    egui::ScrollArea::vertical()
        .id_salt("results_cards")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for frag in app.ctl.output().fragments() {
                match frag {
                    Fragment::Card(card) => draw_card(ui, card),
                    Fragment::Placeholder(msg) => {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.label(msg);
                        });
                    }
                    Fragment::LoadError { file_name } => {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.label(
                                RichText::new(format!(
                                    "Error loading CSV. Ensure {file_name} is present at repository root."
                                ))
                                .color(ui.visuals().error_fg_color),
                            );
                        });
                    }
                }
                ui.add_space(6.0);
            }
        });
}

fn draw_card(ui: &mut egui::Ui, card: &Card) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&card.course).heading());
        if !card.description.is_empty() {
            ui.label(&card.description);
        }
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Dept:").strong());
            ui.label(&card.department);
            ui.label("·");
            ui.label(RichText::new("Term:").strong());
            ui.label(&card.term);
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new("Instructor:").strong());
            ui.label(&card.instructor);
        });
        if let Some(link) = &card.link {
            ui.add(egui::Hyperlink::from_label_and_url(LINK_LABEL, link).open_in_new_tab(true));
        }
    });
}

fn draw_table(ui: &mut egui::Ui, app: &App) {
    let view = app.ctl.view(&app.state.gui.controls());
    if view.is_empty() {
        draw_cards(ui, app); // placeholder fragment
        return;
    }

    let widths = [110.0, 320.0, 110.0, 90.0, 140.0, 200.0];
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("results_table");
    for w in widths {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(22.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui| {
                    ui.label(RichText::new(name).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(r) = view.row(row.index()) else { return };
                let cells = [&r.course, &r.description, &r.department, &r.term, &r.instructor];
                for cell in cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(cell.as_str());
                    });
                }
                row.col(|ui| {
                    if r.has_link() {
                        ui.add(egui::Hyperlink::from_label_and_url(LINK_LABEL, &r.link).open_in_new_tab(true));
                    }
                });
            });
        });
}
