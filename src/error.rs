// src/error.rs
use thiserror::Error;

/// A comprehensive error type for the entire document generation pipeline.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Theme parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Theme is invalid: {0}")]
    InvalidTheme(String),
}
