//! Error types for fetching and decoding form content

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormInfoError {
    #[error("plugin method '{method}' failed with status {code}: {message}")]
    FetchFailed {
        method: String,
        code: i32,
        message: String,
    },

    #[error("unexpected result shape: expected an object or an array, got {0}")]
    UnexpectedResult(&'static str),

    #[error("invalid procedure id in result: {0}")]
    InvalidProcedureId(String),
}
