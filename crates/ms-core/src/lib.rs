//! ms-core: shared vocabulary for modelscript.
//!
//! Contains:
//! - numeric (the Real alias)
//! - value (the numeric values a namespace can hold)
//! - namespace (ordered variable namespaces + the script result accumulator)

pub mod namespace;
pub mod numeric;
pub mod value;

// Re-exports: nice ergonomics for downstream crates
pub use namespace::{HORIZON_NAME, Namespace, ScriptResultSet};
pub use numeric::*;
pub use value::Value;
