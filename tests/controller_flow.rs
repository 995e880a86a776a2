// tests/controller_flow.rs
//
// Controller lifecycle: startup load, input events, reload success/failure,
// stale load tickets.
//
use std::fs;
use std::io;
use std::path::Path;

use ztc_catalog::catalog::Catalog;
use ztc_catalog::controller::{Controller, Controls, Event, LoadState};
use ztc_catalog::error::LoadError;
use ztc_catalog::source::{Source, parse_catalog};

const FIRST: &str = "\
Course,Description,Department,Term,Instructor,Link
CS101,Intro,CS,Fall,,
MATH 245,Linear Algebra,Math,Spring,Noether,https://example.edu/m245
ENG 1,Composition,English,Fall,Austen,
";

const SECOND: &str = "\
Course,Description,Department,Term,Instructor,Link
BIO 3,Cells,Biology,Winter,Darwin,
CHEM 1,Atoms,Chemistry,Summer,Curie,
";

fn write(path: &Path, text: &str) {
    fs::write(path, text).unwrap();
}

fn controls<'a>(search: &'a str, department: &'a str, term: &'a str) -> Controls<'a> {
    Controls { search, department, term }
}

fn courses(ctl: &Controller) -> Vec<String> {
    ctl.output().cards().map(|c| c.course.clone()).collect()
}

#[test]
fn starts_empty_and_loads_on_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ztc_live.csv");
    write(&path, FIRST);

    let mut ctl = Controller::new(Source::File(path));
    assert_eq!(ctl.state(), LoadState::Empty);
    assert!(ctl.catalog().is_empty());
    assert!(ctl.output().fragments().is_empty());

    ctl.handle(Event::Startup, &controls("", "", ""));
    assert_eq!(ctl.state(), LoadState::Loaded);
    assert_eq!(courses(&ctl), vec!["CS101", "MATH 245", "ENG 1"]);
    assert_eq!(ctl.filter_options().departments, vec!["CS", "English", "Math"]);
    assert_eq!(ctl.filter_options().terms, vec!["Fall", "Spring"]);
}

#[test]
fn search_event_matches_intro_and_shows_tba() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ztc_live.csv");
    write(&path, FIRST);
    let mut ctl = Controller::new(Source::File(path));
    ctl.handle(Event::Startup, &controls("", "", ""));

    ctl.handle(Event::SearchInput, &controls("intro", "", ""));
    assert_eq!(courses(&ctl), vec!["CS101"]);
    assert_eq!(ctl.output().cards().next().unwrap().instructor, "TBA");
}

#[test]
fn department_without_matches_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ztc_live.csv");
    write(&path, FIRST);
    let mut ctl = Controller::new(Source::File(path));
    ctl.handle(Event::Startup, &controls("", "", ""));

    ctl.handle(Event::DepartmentChange, &controls("", "Physics", ""));
    assert!(ctl.output().is_no_results());
    assert_eq!(ctl.state(), LoadState::Loaded);

    ctl.handle(Event::TermChange, &controls("", "", "Fall"));
    assert_eq!(courses(&ctl), vec!["CS101", "ENG 1"]);
}

#[test]
fn failed_reload_keeps_previous_catalog_and_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ztc_live.csv");
    write(&path, FIRST);
    let mut ctl = Controller::new(Source::File(path.clone()));
    let c = controls("", "Math", "");
    ctl.handle(Event::Startup, &c);

    let before_catalog = ctl.catalog().clone();
    let before_options = ctl.filter_options().clone();

    fs::remove_file(&path).unwrap();
    ctl.handle(Event::Refresh, &c);

    assert_eq!(ctl.state(), LoadState::LoadFailed);
    assert!(ctl.output().is_load_error());
    assert!(ctl.output().to_html().contains("<code>ztc_live.csv</code>"));
    assert!(ctl.last_error().is_some());
    assert_eq!(ctl.catalog(), &before_catalog);
    assert_eq!(ctl.filter_options(), &before_options);

    // Filtering still works over the retained catalog
    ctl.handle(Event::SearchInput, &c);
    assert_eq!(courses(&ctl), vec!["MATH 245"]);
}

#[test]
fn failed_first_load_leaves_catalog_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctl = Controller::new(Source::File(dir.path().join("missing.csv")));
    ctl.handle(Event::Startup, &controls("", "", ""));
    assert_eq!(ctl.state(), LoadState::LoadFailed);
    assert!(ctl.catalog().is_empty());
    assert!(ctl.filter_options().is_empty());
    assert!(ctl.output().to_text().contains("missing.csv"));
}

#[test]
fn reload_with_disjoint_data_repopulates_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ztc_live.csv");
    write(&path, FIRST);
    let mut ctl = Controller::new(Source::File(path.clone()));
    ctl.handle(Event::Startup, &controls("", "", ""));

    write(&path, SECOND);
    let stale = controls("", "CS", "Fall");
    ctl.handle(Event::Refresh, &stale);

    assert_eq!(ctl.state(), LoadState::Loaded);
    assert_eq!(ctl.filter_options().departments, vec!["Biology", "Chemistry"]);
    assert_eq!(ctl.filter_options().terms, vec!["Summer", "Winter"]);
    // Old selections no longer match anything
    assert!(ctl.output().is_no_results());

    ctl.handle(Event::DepartmentChange, &controls("", "", ""));
    assert_eq!(courses(&ctl), vec!["BIO 3", "CHEM 1"]);
}

#[test]
fn stale_ticket_is_ignored() {
    let mut ctl = Controller::new(Source::default());
    let c = controls("", "", "");

    let old = ctl.begin_load();
    let new = ctl.begin_load();
    assert_eq!(ctl.state(), LoadState::Loading);

    let second: Catalog = parse_catalog(SECOND.as_bytes()).unwrap();
    assert!(ctl.finish_load(new, Ok(second), &c));
    assert_eq!(courses(&ctl), vec!["BIO 3", "CHEM 1"]);

    // The older request completes last; its result must not win
    let first: Catalog = parse_catalog(FIRST.as_bytes()).unwrap();
    assert!(!ctl.finish_load(old, Ok(first), &c));
    assert_eq!(courses(&ctl), vec!["BIO 3", "CHEM 1"]);
    assert_eq!(ctl.state(), LoadState::Loaded);
}

#[test]
fn render_is_repeatable_for_same_inputs() {
    let mut ctl = Controller::new(Source::default());
    let c = controls("a", "", "");
    let t = ctl.begin_load();
    ctl.finish_load(t, Ok(parse_catalog(FIRST.as_bytes()).unwrap()), &c);

    let first = ctl.output().clone();
    ctl.handle(Event::SearchInput, &c);
    assert_eq!(ctl.output(), &first);
}

#[test]
fn failure_message_names_the_source_that_was_loading() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctl = Controller::new(Source::File(dir.path().join("fall_2025.csv")));
    let c = controls("", "", "");

    let ticket = ctl.begin_load();
    assert_eq!(ticket.file_name(), "fall_2025.csv");
    ctl.set_source(Source::File(dir.path().join("spring_2026.csv")));

    let err = LoadError::Io {
        source_name: "fall_2025.csv".into(),
        cause: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    assert!(ctl.finish_load(ticket, Err(err), &c));

    let text = ctl.output().to_html();
    assert!(text.contains("<code>fall_2025.csv</code>"), "{text}");
    assert!(!text.contains("spring_2026.csv"));
}
