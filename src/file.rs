// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::{COLUMNS, Row};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::ExportError;
use crate::render;

/// Write the given rows to the path implied by `export`, in its format.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, rows: &[Row]) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(export.format, rows)?;
    fs::write(&path, contents)?;
    Ok(path)
}

/// Full export text (Copy/Export) for the given rows.
pub fn to_export_string(format: ExportFormat, rows: &[Row]) -> Result<String, ExportError> {
    match format {
        ExportFormat::Html => Ok(render::render(rows).to_html()),
        ExportFormat::Text => Ok(render::render(rows).to_text()),
        ExportFormat::Csv => rows_to_csv(rows),
    }
}

/// Write rows as a loadable dataset (six-column CSV) at `path`.
pub fn write_dataset(path: &Path, rows: &[Row]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, rows_to_csv(rows)?)?;
    Ok(())
}

/// Same six columns the dataset uses, header first, even with no rows.
pub fn rows_to_csv(rows: &[Row]) -> Result<String, ExportError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    wtr.write_record(COLUMNS)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    let buf = wtr.into_inner().map_err(|e| e.into_error())?;

    match String::from_utf8(buf) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
