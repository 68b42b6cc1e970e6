//! Glossary definitions engine for a markdown vault.
//!
//! Extracts `Term, Alias: definition` lines from the vault's definitions
//! document, resolves marked terms (`` `%term%` ``) back to their
//! definitions, and can produce marked copies of documents.

pub mod config;
pub mod definitions;
pub mod engine;
pub mod error;
pub mod render;
pub mod settings;
pub mod vault;

pub use definitions::{DefinitionMap, Lookup};
pub use engine::DefinitionEngine;
pub use error::{GlossaryError, Result};
pub use glossary_types::{DefinitionSettings, NO_DEFINITION_FOUND, RenderedTerm, ScanReport};
pub use vault::{DocumentHandle, FsVault, MemoryVault, Vault};
