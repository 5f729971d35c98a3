// src/api/error.rs

use thiserror::Error;

/// Everything that can go wrong with one backend request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },
    #[error("could not decode response: {0}")]
    Parse(String),
}
