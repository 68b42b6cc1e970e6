//! Marked term → definition lookup with a singular/plural fallback.
//!
//! Only a single trailing `s` is ever stripped or appended.

use super::map::{DefinitionMap, normalize_term};
use glossary_types::NO_DEFINITION_FOUND;

/// Result of resolving a marked term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn definition(self) -> Option<&'a str> {
        match self {
            Lookup::Found(def) => Some(def),
            Lookup::NotFound => None,
        }
    }

    /// The definition, or the "no definition" message shown to the user
    pub fn or_fallback(self) -> &'a str {
        self.definition().unwrap_or(NO_DEFINITION_FOUND)
    }
}

/// Singular and plural lookup candidates for an already-lowercased term
pub fn candidates(lowercase_term: &str) -> (String, String) {
    let singular = lowercase_term
        .strip_suffix('s')
        .unwrap_or(lowercase_term)
        .to_string();
    let plural = format!("{}s", singular);
    (singular, plural)
}

/// Resolve `raw_term` against `map`, singular candidate first
pub fn resolve<'a>(raw_term: &str, map: &'a DefinitionMap) -> Lookup<'a> {
    let (singular, plural) = candidates(&normalize_term(raw_term));

    if let Some(def) = map.get(&singular) {
        return Lookup::Found(def);
    }
    match map.get(&plural) {
        Some(def) => Lookup::Found(def),
        None => Lookup::NotFound,
    }
}
