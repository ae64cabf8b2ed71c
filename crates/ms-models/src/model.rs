//! The Model contract.

use ms_core::{Namespace, Real, Value};

use crate::error::ModelResult;

/// What a bindable field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The integer number of periods.
    Horizon,
    /// A numeric series of horizon length.
    Series,
}

/// One entry in a model's static field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDecl {
    pub const fn horizon(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Horizon,
        }
    }

    pub const fn series(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Series,
        }
    }
}

/// Storage for a model's bindable fields, laid out by its declaration.
///
/// Series are stored in declaration order; the horizon field has no slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelState {
    fields: &'static [FieldDecl],
    horizon: usize,
    series: Vec<Vec<Real>>,
}

impl ModelState {
    /// Empty state: horizon 0, every series zero-length.
    pub fn new(fields: &'static [FieldDecl]) -> Self {
        let count = fields
            .iter()
            .filter(|f| f.kind == FieldKind::Series)
            .count();
        Self {
            fields,
            horizon: 0,
            series: vec![Vec::new(); count],
        }
    }

    pub fn fields(&self) -> &'static [FieldDecl] {
        self.fields
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn set_horizon(&mut self, horizon: usize) {
        self.horizon = horizon;
    }

    /// Position of a series field among the series slots.
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Series)
            .position(|f| f.name == name)
    }

    pub fn series(&self, name: &str) -> Option<&[Real]> {
        self.slot(name).map(|i| self.series[i].as_slice())
    }

    pub fn series_mut(&mut self, name: &str) -> Option<&mut Vec<Real>> {
        self.slot(name).map(move |i| &mut self.series[i])
    }

    /// Series field names with their values, in declaration order.
    pub fn series_iter(&self) -> impl Iterator<Item = (&'static str, &[Real])> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Series)
            .zip(&self.series)
            .map(|(f, values)| (f.name, values.as_slice()))
    }

    /// Replace every series at once. `values` must follow declaration order.
    pub(crate) fn replace_series(&mut self, values: Vec<Vec<Real>>) {
        debug_assert_eq!(values.len(), self.series.len());
        self.series = values;
    }
}

/// A named simulation model.
///
/// Implementors own a [`ModelState`] built from a static declaration and a
/// deterministic `run` that mutates it in place.
pub trait Model {
    /// Variant name this model is registered under.
    fn name(&self) -> &'static str;

    fn state(&self) -> &ModelState;

    fn state_mut(&mut self) -> &mut ModelState;

    /// Advance the model over the whole horizon.
    ///
    /// Must be deterministic and must not read process state.
    fn run(&mut self) -> ModelResult<()>;

    fn fields(&self) -> &'static [FieldDecl] {
        self.state().fields()
    }

    fn horizon(&self) -> usize {
        self.state().horizon()
    }

    fn series(&self, name: &str) -> Option<&[Real]> {
        self.state().series(name)
    }

    /// Snapshot of every bindable field by name, horizon included.
    fn namespace(&self) -> Namespace {
        let state = self.state();
        let mut ns = Namespace::new();
        for field in state.fields() {
            match field.kind {
                FieldKind::Horizon => {
                    ns.insert(field.name, Value::Int(state.horizon() as i64));
                }
                FieldKind::Series => {
                    let values = state.series(field.name).unwrap_or_default();
                    ns.insert(field.name, Value::Series(values.to_vec()));
                }
            }
        }
        ns
    }
}
