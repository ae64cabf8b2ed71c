//! Error types for data loading.

use std::path::PathBuf;

use thiserror::Error;

pub type DataResult<T> = Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read data file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
