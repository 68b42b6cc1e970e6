//! Typed term → definition container.
//!
//! Keys are normalized (lowercased) on the way in and on lookup, so callers
//! never need to remember to fold case themselves.

use serde::Serialize;
use std::collections::BTreeMap;

/// Normalize a term to its map key form
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// Mapping from lowercase term to definition text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefinitionMap {
    entries: BTreeMap<String, String>,
}

impl DefinitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition. A later insert for the same normalized term wins.
    pub fn insert(&mut self, term: &str, definition: impl Into<String>) {
        self.entries.insert(normalize_term(term), definition.into());
    }

    /// Exact lookup after normalization (no plural fallback, see `resolver`)
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(&normalize_term(term)).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(&normalize_term(term))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored (normalized) terms
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty JSON object of the whole map (debug dumps)
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
