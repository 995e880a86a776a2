// src/source.rs
//
// Data source adapter: fetch the dataset and turn it into a Catalog.
// CSV parsing is handed to the `csv` crate.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::catalog::{COLUMNS, Catalog, Row};
use crate::config::consts::{DEFAULT_SOURCE, SOURCE_ENV, USER_AGENT};
use crate::error::LoadError;

/// Where the dataset lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl Source {
    /// `http://` and `https://` strings are URLs, anything else is a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(s.to_string())
        } else {
            Source::File(PathBuf::from(s))
        }
    }

    /// `$ZTC_SOURCE` if set and non-empty, otherwise `ztc_live.csv`.
    pub fn from_env_or_default() -> Self {
        match std::env::var(SOURCE_ENV) {
            Ok(v) if !v.trim().is_empty() => Source::parse(&v),
            _ => Source::default(),
        }
    }

    /// Last path segment, used in user-facing messages.
    pub fn file_name(&self) -> String {
        match self {
            Source::File(p) => p
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string()),
            Source::Url(u) => {
                let no_query = u.split(['?', '#']).next().unwrap_or(u);
                no_query
                    .rsplit('/')
                    .find(|seg| !seg.is_empty())
                    .unwrap_or(no_query)
                    .to_string()
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
        }
    }
}

/// Load the whole dataset. Safe to call again for a reload.
pub fn load(source: &Source) -> Result<Catalog, LoadError> {
    info!("Load: begin source={}", source);
    let catalog = match source {
        Source::File(path) => load_file(path, source)?,
        Source::Url(_) => load_url(source)?,
    };
    info!("Load: OK source={}, rows={}", source, catalog.len());
    Ok(catalog)
}

fn load_file(path: &Path, source: &Source) -> Result<Catalog, LoadError> {
    let file = File::open(path).map_err(|cause| LoadError::Io {
        source_name: source.to_string(),
        cause,
    })?;
    parse_catalog(file).map_err(|cause| parse_error(source, cause))
}

fn load_url(source: &Source) -> Result<Catalog, LoadError> {
    let body = fetch_text(source)?;
    parse_catalog(body.as_bytes()).map_err(|cause| parse_error(source, cause))
}

/// Whole resource as text, from disk or over HTTP. Used for pages that are
/// not CSV (the scraper's input).
pub fn fetch_text(source: &Source) -> Result<String, LoadError> {
    match source {
        Source::File(path) => std::fs::read_to_string(path).map_err(|cause| LoadError::Io {
            source_name: source.to_string(),
            cause,
        }),
        Source::Url(url) => fetch(url).map_err(|cause| LoadError::Fetch {
            source_name: source.to_string(),
            cause,
        }),
    }
}

fn fetch(url: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder().user_agent(USER_AGENT).build()?;
    client.get(url).send()?.error_for_status()?.text()
}

fn parse_error(source: &Source, cause: csv::Error) -> LoadError {
    // csv::Error also covers non-UTF-8 input and read errors mid-stream
    LoadError::Parse { source_name: source.to_string(), cause }
}

/// Parse header-first CSV into a Catalog. Blank lines are skipped by the
/// reader; rows with neither Course nor Description are dropped here.
/// Columns are matched by header name, so order and extra columns don't
/// matter, and short rows leave the missing fields empty.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Catalog, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let cols = ColumnMap::from_headers(rdr.headers()?);
    if cols.is_unmatched() {
        debug!("Load: header names none of {:?}", COLUMNS);
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(cols.row(&record));
    }

    let seen = rows.len();
    let catalog = Catalog::from_rows(rows);
    let dropped = seen - catalog.len();
    if dropped > 0 {
        debug!("Load: dropped {} row(s) with no Course or Description", dropped);
    }
    Ok(catalog)
}

/// Position of each known column in the file's header, if present.
struct ColumnMap([Option<usize>; 6]);

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut ix = [None; 6];
        for (slot, name) in ix.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name);
        }
        Self(ix)
    }

    fn is_unmatched(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    fn field(&self, record: &csv::StringRecord, col: usize) -> String {
        self.0[col]
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .to_string()
    }

    fn row(&self, record: &csv::StringRecord) -> Row {
        Row {
            course: self.field(record, 0),
            description: self.field(record, 1),
            department: self.field(record, 2),
            term: self.field(record, 3),
            instructor: self.field(record, 4),
            link: self.field(record, 5),
        }
    }
}
