//! Error types for the dashboard core

use thiserror::Error;

/// Why a dashboard fetch did not produce data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network failure or the request never completed
    #[error("request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// Body could not be decoded into the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("company id {0} appears more than once in the directory")]
    DuplicateCompany(i64),
}
