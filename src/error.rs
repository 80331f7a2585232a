use std::path::PathBuf;
use thiserror::Error;

/// Why a `YYYY-MM` period string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("'{0}' entspricht nicht dem Format YYYY-MM")]
    Format(String),
    #[error("'{0}' enthält keinen gültigen Monat (01-12)")]
    Month(String),
}

/// Failures while reading the accident data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Die Datei '{}' wurde nicht gefunden.", .0.display())]
    NotFound(PathBuf),
    #[error("Die Datei '{}' konnte nicht gelesen werden: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Fehler beim Lesen der JSON-Datei: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Ungültiger Datensatz Nr. {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: PeriodError,
    },
}
