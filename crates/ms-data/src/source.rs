//! Parsing of named vector records.

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{DataError, DataResult};

/// Record whose token count defines the horizon.
pub const HORIZON_KEY: &str = "LATA";

/// Mapping from record name to its raw, unvalidated tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedVectorSet {
    vectors: IndexMap<String, Vec<String>>,
}

impl NamedVectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse records from text.
    ///
    /// Lines with fewer than two tokens are ignored. A repeated name replaces
    /// the earlier record.
    pub fn parse(text: &str) -> Self {
        let mut set = Self::new();
        for line in text.lines() {
            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let values: Vec<String> = tokens.map(str::to_owned).collect();
            if values.is_empty() {
                continue;
            }
            if set.vectors.contains_key(name) {
                debug!(name, "duplicate record, last one wins");
            }
            set.vectors.insert(name.to_owned(), values);
        }
        set
    }

    pub fn insert<I, S>(&mut self, name: impl Into<String>, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vectors
            .insert(name.into(), tokens.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.vectors.get(name).map(Vec::as_slice)
    }

    /// Number of periods, taken from the `LATA` record.
    pub fn horizon(&self) -> Option<usize> {
        self.vectors.get(HORIZON_KEY).map(Vec::len)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vectors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Read and parse a data file.
pub fn read_vectors(path: &Path) -> DataResult<NamedVectorSet> {
    let content = std::fs::read_to_string(path).map_err(|e| DataError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let set = NamedVectorSet::parse(&content);
    debug!(path = %path.display(), records = set.len(), "loaded data file");
    Ok(set)
}
