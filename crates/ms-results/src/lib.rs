//! ms-results: merging model state and script output into one table.

pub mod table;

pub use table::{ResultRow, ResultTable, ScalarRendering, TableOptions};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
