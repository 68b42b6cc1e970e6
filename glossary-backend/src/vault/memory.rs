//! In-memory vault, for hosts that hand documents over directly (and tests)

use super::{DocumentHandle, Vault};
use crate::error::{GlossaryError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::io;

#[derive(Default)]
pub struct MemoryVault {
    documents: RwLock<BTreeMap<String, String>>,
    unreadable: RwLock<HashSet<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vault from `(path, content)` pairs
    pub fn from_documents<I, P, C>(documents: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let vault = Self::new();
        for (path, content) in documents {
            vault.insert(path, content);
        }
        vault
    }

    /// Add or replace a document
    pub fn insert(&self, path: impl Into<String>, content: impl Into<String>) {
        self.documents.write().insert(path.into(), content.into());
    }

    /// Drop a document, returning its content
    pub fn remove(&self, path: &str) -> Option<String> {
        self.documents.write().remove(path)
    }

    /// Current content of a document, if present
    pub fn get(&self, path: &str) -> Option<String> {
        self.documents.read().get(path).cloned()
    }

    /// Make reads of `path` fail, simulating a host read error
    pub fn mark_unreadable(&self, path: impl Into<String>) {
        self.unreadable.write().insert(path.into());
    }
}

#[async_trait]
impl Vault for MemoryVault {
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>> {
        Ok(self
            .documents
            .read()
            .keys()
            .map(|path| DocumentHandle::new(path.clone()))
            .collect())
    }

    async fn read(&self, doc: &DocumentHandle) -> Result<String> {
        if self.unreadable.read().contains(&doc.path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, doc.path.clone()).into());
        }
        self.get(&doc.path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no document at {}", doc.path)).into()
        })
    }

    async fn create(&self, path: &str, content: &str) -> Result<DocumentHandle> {
        let mut documents = self.documents.write();
        if documents.contains_key(path) {
            return Err(GlossaryError::DocumentExists(path.to_string()));
        }
        documents.insert(path.to_string(), content.to_string());
        Ok(DocumentHandle::new(path))
    }
}
