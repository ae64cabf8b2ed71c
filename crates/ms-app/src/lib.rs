//! Application service layer for modelscript.
//!
//! Drives the pipeline (load data, bind, run, script passes, aggregate) for
//! front ends, and provides configuration loading and discovery of models and
//! data files.

pub mod config;
pub mod discovery;
pub mod error;
pub mod session;

// Re-export key types for convenience
pub use config::{ScriptSeeding, SessionConfig, load_config};
pub use discovery::{list_data_files, list_models};
pub use error::{AppError, AppResult};
pub use ms_models::{Model, ModelRegistry};
pub use ms_results::{ResultTable, ScalarRendering, TableOptions};
pub use ms_script::EngineOptions;
pub use session::{ScriptOutcome, Session};
