use thiserror::Error;

use crate::model::domain::Domain;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("duplicate domain in selection: {0}")]
    DuplicateDomain(Domain),

    #[error("upstream resolution failed: {0}")]
    Upstream(String),

    #[error("row {row} has {actual} cells but the header spans {expected} columns")]
    InvariantViolation {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("header row {row} spans {actual} columns but the table is {expected} wide")]
    HeaderSpanMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("enrichment refresh was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, EnrichmentError>;
