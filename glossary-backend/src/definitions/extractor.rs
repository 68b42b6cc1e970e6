//! Definition extraction from the definitions document(s).
//!
//! A definition line looks like `Cat, Cats: a small domesticated feline`.
//! Everything before the first `:` is a comma-separated alias group,
//! everything after it is the definition, kept verbatim.

use super::map::DefinitionMap;

/// Separates the alias group from the definition body
pub const DELIMITER: char = ':';

/// Separates aliases inside the alias group
pub const ALIAS_SEPARATOR: char = ',';

/// Markup stripped from the alias group before splitting (bold/italic/heading
/// markers and a stray acute accent)
pub const MARKUP_CHARS: [char; 4] = ['*', '_', '#', '\u{00B4}'];

/// A document as seen by the extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display name (file stem, no path or extension)
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// One parsed definition line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionLine<'a> {
    /// Trimmed aliases, original case, empty aliases dropped
    pub aliases: Vec<String>,
    pub definition: &'a str,
}

/// Result of scanning a set of documents
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub map: DefinitionMap,
    /// Definition lines parsed, once per line regardless of alias count
    pub count: usize,
    pub documents_scanned: usize,
}

/// Whether a document's display name selects it for scanning (exact match)
pub fn is_definitions_document(name: &str, target_name: &str) -> bool {
    name == target_name
}

/// Remove markup characters from an alias group
fn strip_markup(group: &str) -> String {
    group.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect()
}

/// Parse a single line. Returns `None` when the line has no delimiter or
/// no usable alias.
pub fn parse_definition_line(line: &str) -> Option<DefinitionLine<'_>> {
    let (group, definition) = line.split_once(DELIMITER)?;

    let aliases: Vec<String> = strip_markup(group)
        .split(ALIAS_SEPARATOR)
        .map(|alias| alias.trim().to_string())
        .filter(|alias| !alias.is_empty())
        .collect();

    if aliases.is_empty() {
        log::debug!("[GLOSSARY] Skipping definition line without aliases: {:?}", line);
        return None;
    }

    Some(DefinitionLine {
        aliases,
        definition,
    })
}

/// Parse every definition line of `text` into `map`. Returns the number of
/// definition lines found.
pub fn extract_definitions(text: &str, map: &mut DefinitionMap) -> usize {
    let mut count = 0;
    for line in text.split('\n') {
        if let Some(parsed) = parse_definition_line(line) {
            for alias in &parsed.aliases {
                map.insert(alias, parsed.definition);
            }
            count += 1;
        }
    }
    count
}

/// Build a fresh map from every document named `target_name`
pub fn scan<'a, I>(documents: I, target_name: &str) -> ScanOutcome
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut outcome = ScanOutcome::default();

    for doc in documents {
        if !is_definitions_document(&doc.name, target_name) {
            continue;
        }
        outcome.count += extract_definitions(&doc.text, &mut outcome.map);
        outcome.documents_scanned += 1;
    }

    outcome
}
