// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use log::{debug, info};

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    controller::{Controller, Event, LoadState},
    gui::worker::PendingLoad,
    source,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // control values + options (UI thread only)
    pub state: AppState,

    // catalog, filter options and rendered output
    pub ctl: Controller,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,

    pending: Option<PendingLoad>,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let ctl = Controller::new(state.options.source.clone());
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            ctl,
            out_path_text,
            out_path_dirty: false,
            status: String::from("Idle"),
            pending: None,
        };

        info!("Init: source={}", app.ctl.source());
        app.dispatch(Event::Startup, ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Single entry point for UI events. Loads go to a worker thread;
    /// everything else re-renders synchronously.
    pub fn dispatch(&mut self, event: Event, ctx: &egui::Context) {
        match event {
            Event::Startup | Event::Refresh => self.start_load(ctx),
            Event::SearchInput | Event::DepartmentChange | Event::TermChange => {
                self.ctl.handle(event, &self.state.gui.controls());
            }
        }
    }

    fn start_load(&mut self, ctx: &egui::Context) {
        if self.pending.is_some() {
            debug!("Load: already in flight, ignoring");
            return;
        }

        let ticket = self.ctl.begin_load();
        let ctx2 = ctx.clone();
        self.pending = Some(PendingLoad::spawn(
            ticket,
            self.ctl.source().clone(),
            source::load,
            move || ctx2.request_repaint(),
        ));
        self.status(format!("Loading {}…", self.ctl.source()));
    }

    /// Apply a finished background load, if there is one.
    fn poll_load(&mut self) {
        let Some(result) = self.pending.as_ref().and_then(PendingLoad::poll) else { return };
        let Some(pending) = self.pending.take() else { return };
        self.ctl.finish_load(pending.into_ticket(), result, &self.state.gui.controls());

        let msg = match self.ctl.state() {
            LoadState::Loaded => format!("Loaded {} course(s)", self.ctl.catalog().len()),
            LoadState::LoadFailed => {
                format!("Error: {}", self.ctl.last_error().unwrap_or("load failed"))
            }
            LoadState::Empty | LoadState::Loading => return,
        };
        self.status(msg);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            crate::gui::components::filter_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::results::draw(ui, self);
        });
    }
}
