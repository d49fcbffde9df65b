use thiserror::Error;

use crate::form::FieldErrors;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("loader thread exited without a result")]
    Worker,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("no record at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no record selected")]
    NoSelection,
    #[error("no form is open")]
    NoOpenForm,
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
}
