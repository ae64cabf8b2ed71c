//! Error types for script evaluation.

use thiserror::Error;

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("Script evaluation failed: {message}")]
    Eval { message: String },
}

impl From<Box<rhai::EvalAltResult>> for ScriptError {
    fn from(err: Box<rhai::EvalAltResult>) -> Self {
        ScriptError::Eval {
            message: err.to_string(),
        }
    }
}
