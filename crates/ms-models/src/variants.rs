//! Compiled-in national-accounts models.
//!
//! Both variants grow consumption (`KI`, `KS`), investment (`INW`), exports
//! (`EKS`) and imports (`IMP`) by their yearly multipliers (`tw*`) and sum them
//! into GDP (`PKB`), imports entering negatively. They are registered
//! separately so a session can pick either by name.

use crate::error::ModelResult;
use crate::model::{FieldDecl, Model, ModelState};
use crate::recurrence::{Category, Recurrence};

const GDP_FIELDS: &[FieldDecl] = &[
    FieldDecl::horizon("LL"),
    FieldDecl::series("twKI"),
    FieldDecl::series("twKS"),
    FieldDecl::series("twINW"),
    FieldDecl::series("twEKS"),
    FieldDecl::series("twIMP"),
    FieldDecl::series("KI"),
    FieldDecl::series("KS"),
    FieldDecl::series("INW"),
    FieldDecl::series("EKS"),
    FieldDecl::series("IMP"),
    FieldDecl::series("PKB"),
];

const GDP_RECURRENCE: Recurrence = Recurrence {
    categories: &[
        Category::added("KI", "twKI"),
        Category::added("KS", "twKS"),
        Category::added("INW", "twINW"),
        Category::added("EKS", "twEKS"),
        Category::subtracted("IMP", "twIMP"),
    ],
    aggregate: "PKB",
};

#[derive(Debug, Clone)]
pub struct Model1 {
    state: ModelState,
}

impl Model1 {
    pub const NAME: &'static str = "Model1";

    pub fn new() -> Self {
        Self {
            state: ModelState::new(GDP_FIELDS),
        }
    }
}

impl Default for Model1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Model1 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn state(&self) -> &ModelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ModelState {
        &mut self.state
    }

    fn run(&mut self) -> ModelResult<()> {
        GDP_RECURRENCE.apply(&mut self.state)
    }
}

/// Same formula as [`Model1`], kept as its own plugin.
#[derive(Debug, Clone)]
pub struct Model3 {
    state: ModelState,
}

impl Model3 {
    pub const NAME: &'static str = "Model3";

    pub fn new() -> Self {
        Self {
            state: ModelState::new(GDP_FIELDS),
        }
    }
}

impl Default for Model3 {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Model3 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn state(&self) -> &ModelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ModelState {
        &mut self.state
    }

    fn run(&mut self) -> ModelResult<()> {
        GDP_RECURRENCE.apply(&mut self.state)
    }
}
