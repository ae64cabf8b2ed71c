//! ms-models: simulation models and their data binding.
//!
//! Provides:
//! - the `Model` contract with static field declarations
//! - the shared multiplicative recurrence used by the national-accounts variants
//! - the Binder that maps raw data tokens onto model state
//! - a registry of compiled-in variants selectable by name

pub mod binder;
pub mod error;
pub mod model;
pub mod recurrence;
pub mod registry;
pub mod variants;

pub use binder::bind;
pub use error::{ModelError, ModelResult};
pub use model::{FieldDecl, FieldKind, Model, ModelState};
pub use recurrence::{Category, Recurrence, Sign};
pub use registry::{ModelFactory, ModelRegistry};
pub use variants::{Model1, Model3};
