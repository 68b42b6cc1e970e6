//! Directory-backed vault of markdown documents

use super::{DocumentHandle, Vault, file_ops};
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, rel_path: &str) -> PathBuf {
        self.root.join(rel_path)
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn list_documents(&self) -> Result<Vec<DocumentHandle>> {
        let files = file_ops::list_markdown_files(&self.root).await?;
        let docs: Vec<DocumentHandle> = files
            .iter()
            .filter_map(|f| file_ops::relative_path(&self.root, f))
            .map(DocumentHandle::new)
            .collect();

        log::debug!("[VAULT] Listed {} documents under {}", docs.len(), self.root.display());
        Ok(docs)
    }

    async fn read(&self, doc: &DocumentHandle) -> Result<String> {
        Ok(file_ops::read_document(&self.full_path(&doc.path)).await?)
    }

    async fn create(&self, path: &str, content: &str) -> Result<DocumentHandle> {
        file_ops::create_document(&self.full_path(path), content).await?;
        log::info!("[VAULT] Created {}", path);
        Ok(DocumentHandle::new(path))
    }
}
