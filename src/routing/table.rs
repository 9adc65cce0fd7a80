//! Redirect table construction and lookup.

use std::collections::HashMap;

use crate::source::{decode, Format, LoadError, RedirectSource, Record};

/// Immutable mapping from request path to redirect destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
    entries: HashMap<String, String>,
}

impl RedirectTable {
    /// Build a table from records in source order.
    ///
    /// When a path repeats, the later record wins.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            if let Some(previous) = entries.insert(record.path, record.destination) {
                tracing::trace!(overwritten = %previous, "Duplicate redirect path");
            }
        }
        Self { entries }
    }

    /// Decode `source` and build a table from it.
    pub fn load(format: Format, source: &RedirectSource) -> Result<Self, LoadError> {
        Ok(Self::from_records(decode(format, source)?))
    }

    /// Look up the destination for an exact request path.
    ///
    /// Returns `None` for unknown paths and for paths mapped to an empty
    /// destination.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.entries
            .get(path)
            .map(String::as_str)
            .filter(|destination| !destination.is_empty())
    }

    /// Number of distinct paths, including ones with empty destinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<Record> for RedirectTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
