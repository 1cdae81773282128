//! Error types for the loading boundaries (CSV tables, profile files)
//!
//! The numeric core never fails; only I/O and parsing can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("return table has no entry for the fallback category {0}")]
    MissingCategory(&'static str),
}

impl AnalyticsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalyticsError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        AnalyticsError::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
