//! Crate-wide error type.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown {kind} token: {value}")]
    UnknownToken { kind: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PortalResult<T> = Result<T, PortalError>;
