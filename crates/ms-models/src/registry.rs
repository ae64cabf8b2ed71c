//! Name-to-constructor registry of model variants.

use std::collections::BTreeMap;

use crate::error::{ModelError, ModelResult};
use crate::model::Model;
use crate::variants::{Model1, Model3};

pub type ModelFactory = fn() -> Box<dyn Model>;

#[derive(Clone, Default)]
pub struct ModelRegistry {
    factories: BTreeMap<&'static str, ModelFactory>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every compiled-in variant.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Model1::NAME, || Box::new(Model1::new()));
        registry.register(Model3::NAME, || Box::new(Model3::new()));
        registry
    }

    /// Add or replace a variant.
    pub fn register(&mut self, name: &'static str, factory: ModelFactory) {
        self.factories.insert(name, factory);
    }

    /// Construct a fresh, unbound model by variant name.
    pub fn create(&self, name: &str) -> ModelResult<Box<dyn Model>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ModelError::UnknownVariant {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Variant names in alphabetical order.
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("variants", &self.names())
            .finish()
    }
}
