//! Error types for model binding and execution.

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Data has no LATA record; the horizon cannot be determined")]
    MissingHorizon,

    #[error("Invalid number for {field} at position {index}: {token:?}")]
    InvalidNumber {
        field: String,
        index: usize,
        token: String,
    },

    #[error("Record {field} has no values to pad from")]
    EmptySeries { field: String },

    #[error("Unknown model variant: {name}")]
    UnknownVariant { name: String },

    #[error("Series {field} has length {len}, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("Model does not declare series {field}")]
    UndeclaredField { field: &'static str },
}
