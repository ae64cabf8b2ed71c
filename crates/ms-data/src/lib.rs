//! ms-data: whitespace-delimited vector data files.
//!
//! A data file holds one record per line, `NAME v1 v2 ... vN`. The `LATA`
//! record's token count sets the horizon of everything downstream.

pub mod error;
pub mod source;

pub use error::{DataError, DataResult};
pub use source::{HORIZON_KEY, NamedVectorSet, read_vectors};
