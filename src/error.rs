// src/error.rs
use std::io;

/// The only failure the catalog core recognises: the dataset could not be
/// read or could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {source_name}: {cause}")]
    Io {
        source_name: String,
        #[source]
        cause: io::Error,
    },

    #[error("could not fetch {source_name}: {cause}")]
    Fetch {
        source_name: String,
        #[source]
        cause: reqwest::Error,
    },

    #[error("could not parse {source_name}: {cause}")]
    Parse {
        source_name: String,
        #[source]
        cause: csv::Error,
    },

    /// The background load ended without producing a result.
    #[error("load of {source_name} was interrupted")]
    Interrupted { source_name: String },
}

impl LoadError {
    /// Human-readable name of the resource that failed.
    pub fn source_name(&self) -> &str {
        match self {
            LoadError::Io { source_name, .. }
            | LoadError::Fetch { source_name, .. }
            | LoadError::Parse { source_name, .. }
            | LoadError::Interrupted { source_name } => source_name,
        }
    }
}

/// Errors from writing filtered results to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
}
