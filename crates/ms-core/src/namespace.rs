//! Named variable namespaces.
//!
//! A [`Namespace`] is what a model exports and what a script sees and
//! returns. A [`ScriptResultSet`] accumulates script output across a session.

use indexmap::IndexMap;

use crate::Value;

/// Name of the structural horizon variable. Never treated as a result.
pub const HORIZON_NAME: &str = "LL";

/// Insertion-ordered mapping from variable name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    vars: IndexMap<String, Value>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Namespace {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl FromIterator<(String, Value)> for Namespace {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

/// Session-scoped accumulator of script output.
///
/// Names of one character or less are scratch variables and are dropped, as
/// is the horizon variable. A later write to a name replaces the value but
/// keeps the position where the name first appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptResultSet {
    entries: IndexMap<String, Value>,
}

impl ScriptResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a variable name is kept as a result.
    pub fn accepts(name: &str) -> bool {
        name.chars().count() > 1 && name != HORIZON_NAME
    }

    /// Merge every accepted entry of a script's resulting namespace.
    /// Returns how many entries were taken.
    pub fn absorb(&mut self, namespace: Namespace) -> usize {
        let mut taken = 0;
        for (name, value) in namespace {
            if Self::accepts(&name) {
                self.entries.insert(name, value);
                taken += 1;
            }
        }
        taken
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
