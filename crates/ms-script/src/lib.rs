//! ms-script: evaluation of user scripts against a model namespace.
//!
//! Scripts are written in [Rhai](https://rhai.rs). Every namespace variable is
//! pre-declared in the script scope: the horizon `LL` as an integer, series as
//! arrays of floats. New top-level `let` bindings become part of the result.
//!
//! Host utilities available to scripts:
//! - `zeros(n)`: array of `n` zeros
//! - `filled(n, v)`: array of `n` copies of `v`
//! - `sum(a)`, `mean(a)`: reductions over a numeric array
//! - `print(x)` / `debug(x)`: forwarded to `tracing`

pub mod convert;
pub mod engine;
pub mod error;

pub use engine::{DEFAULT_MAX_ARRAY_SIZE, EngineOptions, ScriptEngine};
pub use error::{ScriptError, ScriptResult};
