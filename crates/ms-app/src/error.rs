//! Error types for the ms-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the pipeline crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Failed to read data file: {path}")]
    DataFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read script file: {path}")]
    ScriptFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list data directory: {path}")]
    DataDirRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Binding failed: {0}")]
    Binding(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ms-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ms_data::DataError> for AppError {
    fn from(err: ms_data::DataError) -> Self {
        match err {
            ms_data::DataError::Read { path, source } => AppError::DataFileRead { path, source },
        }
    }
}

impl From<ms_models::ModelError> for AppError {
    fn from(err: ms_models::ModelError) -> Self {
        use ms_models::ModelError;
        match &err {
            ModelError::UnknownVariant { name } => AppError::UnknownModel(name.clone()),
            ModelError::MissingHorizon
            | ModelError::InvalidNumber { .. }
            | ModelError::EmptySeries { .. } => AppError::Binding(err.to_string()),
            _ => AppError::Model(err.to_string()),
        }
    }
}

impl From<ms_results::ResultsError> for AppError {
    fn from(err: ms_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
