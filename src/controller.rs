// src/controller.rs
//
// Owns the loaded catalog and wires UI events to load/filter/render.
//
// Front ends register their controls by mapping widget changes onto `Event`
// and calling `Controller::handle` with a fresh `Controls` snapshot. Loads can
// also be split into `begin_load` / `finish_load` so the fetch runs off the UI
// thread; each load gets a ticket and only the newest ticket is applied.

use log::{debug, error, info};

use crate::{
    catalog::Catalog,
    error::LoadError,
    filters::FilterOptions,
    query::{self, CatalogView, QueryState},
    render::{self, Rendered},
    source::{self, Source},
};

/// Read-only snapshot of the control values at the moment of an event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls<'a> {
    pub search: &'a str,
    /// Empty = all departments
    pub department: &'a str,
    /// Empty = all terms
    pub term: &'a str,
}

impl Controls<'_> {
    pub fn query(&self) -> QueryState {
        QueryState::from_controls(self.search, self.department, self.term)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Fired once when the front end comes up
    Startup,
    SearchInput,
    DepartmentChange,
    TermChange,
    /// Manual reload
    Refresh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Empty,
    Loading,
    Loaded,
    /// Last load failed; any previously loaded catalog is still in place
    LoadFailed,
}

/// Handed out by `begin_load`; `finish_load` ignores all but the newest.
/// Carries the name of the source it was issued for, so a failure message
/// names what was actually loaded even if the source changed meanwhile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    file_name: String,
}

impl LoadTicket {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

pub struct Controller {
    source: Source,
    catalog: Catalog,
    options: FilterOptions,
    state: LoadState,
    output: Rendered,
    generation: u64,
    last_error: Option<String>,
}

impl Controller {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            catalog: Catalog::empty(),
            options: FilterOptions::default(),
            state: LoadState::Empty,
            output: Rendered::default(),
            generation: 0,
            last_error: None,
        }
    }

    /* ---------- accessors ---------- */

    pub fn source(&self) -> &Source { &self.source }
    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn filter_options(&self) -> &FilterOptions { &self.options }
    pub fn state(&self) -> LoadState { self.state }
    pub fn output(&self) -> &Rendered { &self.output }
    pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }

    /// Takes effect on the next load.
    pub fn set_source(&mut self, source: Source) {
        info!("Source: {} → {}", self.source, source);
        self.source = source;
    }

    /// Rows matching the current controls, for export and table views.
    pub fn view(&self, controls: &Controls<'_>) -> CatalogView<'_> {
        query::filter(&self.catalog, &controls.query())
    }

    /* ---------- events ---------- */

    pub fn handle(&mut self, event: Event, controls: &Controls<'_>) {
        debug!("Event: {:?}", event);
        match event {
            Event::Startup | Event::Refresh => self.reload(controls),
            Event::SearchInput | Event::DepartmentChange | Event::TermChange => {
                self.refresh_view(controls)
            }
        }
    }

    /// Synchronous load with the configured source.
    pub fn reload(&mut self, controls: &Controls<'_>) {
        let ticket = self.begin_load();
        let result = source::load(&self.source);
        self.finish_load(ticket, result, controls);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        info!("Load: requested #{} source={}", self.generation, self.source);
        LoadTicket { generation: self.generation, file_name: self.source.file_name() }
    }

    /// Apply a finished load. Returns false if a newer load was requested
    /// since `ticket` was issued; the result is then dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Catalog, LoadError>,
        controls: &Controls<'_>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!("Load: discarding #{} (newest is #{})", ticket.generation, self.generation);
            return false;
        }

        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.options = FilterOptions::build(&self.catalog);
                self.state = LoadState::Loaded;
                self.last_error = None;
                info!(
                    "Load: applied #{} rows={} departments={} terms={}",
                    ticket.generation,
                    self.catalog.len(),
                    self.options.departments.len(),
                    self.options.terms.len()
                );
                self.refresh_view(controls);
            }
            Err(e) => {
                error!("Load: Error #{}: {}", ticket.generation, e);
                self.state = LoadState::LoadFailed;
                self.last_error = Some(e.to_string());
                self.output = Rendered::load_error(ticket.file_name);
            }
        }
        true
    }

    /// Re-run filter + render from the current catalog and controls.
    pub fn refresh_view(&mut self, controls: &Controls<'_>) {
        let query = controls.query();
        let view = query::filter(&self.catalog, &query);
        debug!(
            "View: text={:?} dept={:?} term={:?} → {}/{} rows",
            query.text,
            query.department,
            query.term,
            view.len(),
            self.catalog.len()
        );
        self.output = render::render(view.rows());
    }
}
