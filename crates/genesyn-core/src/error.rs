use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The reference table header lacks one or more required columns.
    #[error("reference table {} is missing required column(s): {}", path.display(), missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed reference table {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid report row: {0}")]
    MalformedReport(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
