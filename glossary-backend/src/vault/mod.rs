//! Vault: the host's document collection, as seen by the engine
//!
//! The host owns the documents; the engine only lists them, reads them and
//! creates new ones (marked copies, debug dumps). `FsVault` serves a directory
//! of markdown files, `MemoryVault` keeps everything in memory.

pub mod file_ops;
pub mod fs_vault;
pub mod memory;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub use fs_vault::FsVault;
pub use memory::MemoryVault;

/// Reference to a document inside a vault
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentHandle {
    /// Vault-relative path, `/`-separated (e.g. `Glossary/Definitions.md`)
    pub path: String,
    /// Display name: file stem without directories or extension
    pub name: String,
}

impl DocumentHandle {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = file_ops::display_name(Path::new(&path));
        Self { path, name }
    }
}

#[async_trait]
pub trait Vault: Send + Sync {
    /// All documents currently in the vault
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>>;

    /// Full text of a document
    async fn read(&self, doc: &DocumentHandle) -> Result<String>;

    /// Create a new document at `path`; never overwrites
    async fn create(&self, path: &str, content: &str) -> Result<DocumentHandle>;
}
