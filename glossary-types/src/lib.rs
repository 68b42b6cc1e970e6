//! Shared types for the glossary engine and the host that embeds it.

use serde::{Deserialize, Serialize};

/// Shown in place of a definition when a marked term has no entry.
pub const NO_DEFINITION_FOUND: &str = "No definition found :/";

// =====================================================
// Settings
// =====================================================

/// User-editable settings, persisted by the host.
///
/// Fields missing from stored data fall back to their defaults, so older
/// settings files keep loading after new fields are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionSettings {
    /// Display name (file stem) of the documents scanned for definitions
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Color used by the host to draw marked terms
    #[serde(default = "default_definition_color")]
    pub definition_color: String,
}

fn default_filename() -> String {
    "Definitions".to_string()
}

fn default_definition_color() -> String {
    "#0000FF".to_string()
}

impl Default for DefinitionSettings {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            definition_color: default_definition_color(),
        }
    }
}

// =====================================================
// Scan / Render Results
// =====================================================

/// Outcome of one definitions scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Definition lines parsed (one per line, not per alias)
    pub definitions_found: usize,
    /// Matching documents that were read and parsed
    pub documents_scanned: usize,
    /// Distinct normalized terms in the installed map
    pub term_count: usize,
    /// Paths of matching documents that could not be read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_documents: Vec<String>,
}

impl ScanReport {
    /// True when every matching document was read
    pub fn is_complete(&self) -> bool {
        self.failed_documents.is_empty()
    }

    /// Message the host shows after a scan
    pub fn notice(&self) -> String {
        format!("Found {} definitions.", self.definitions_found)
    }
}

/// Presentation data for one marked inline-code span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTerm {
    /// Term text shown in place of the code span (sentinels removed)
    pub term: String,
    /// Tooltip body: the definition, or [`NO_DEFINITION_FOUND`]
    pub tooltip: String,
    pub color: String,
    /// Whether the tooltip carries a real definition
    pub found: bool,
}
