use std::path::PathBuf;

use thiserror::Error;

use crate::collaborator::CollaboratorError;

/// Message shown to end users for any failed search.
const SEARCH_FAILED_MESSAGE: &str =
    "No se pudieron obtener resultados. Revisa la búsqueda e inténtalo de nuevo.";

/// The search service's text did not contain a usable JSON array.
#[derive(Debug, Error)]
pub enum MalformedResponse {
    #[error("malformed response: no JSON array delimiters found")]
    NoArrayDelimiters,

    #[error("malformed response: JSON array is never closed")]
    UnterminatedArray,

    #[error("malformed response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// A search failed; no collection was produced.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search service request failed: {0}")]
    Collaborator(#[source] CollaboratorError),

    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),
}

impl SearchError {
    /// The single user-facing message for this failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a search is already in progress")]
    Busy,

    #[error(transparent)]
    Search(#[from] SearchError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush error: {0}")]
    Flush(#[source] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("I/O error writing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
