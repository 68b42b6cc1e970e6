//! File operations for directory-backed vaults
//!
//! Lists markdown documents, reads them, and creates new ones without ever
//! overwriting an existing file.

use crate::error::{GlossaryError, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Display name of a document: its file stem, without directories or extension
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Hidden entries (like `.obsidian/` or `.trash/`) are never part of the vault
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map(|e| e == "md").unwrap_or(false)
}

/// List all markdown files under `root` (recursively), sorted
pub async fn list_markdown_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if !root.exists() {
        return Ok(files);
    }

    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if is_hidden(&path) {
                continue;
            }
            if entry.file_type().await?.is_dir() {
                pending.push(path);
            } else if is_markdown(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Get the vault-relative path of a file, with `/` separators
pub fn relative_path(root: &Path, file_path: &Path) -> Option<String> {
    file_path
        .strip_prefix(root)
        .ok()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
}

/// Read a document as UTF-8 text
pub async fn read_document(path: &Path) -> io::Result<String> {
    tokio::fs::read_to_string(path).await
}

/// Create a new document (parent directories as needed). Fails with
/// `DocumentExists` rather than overwriting.
pub async fn create_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut file = match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(GlossaryError::DocumentExists(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
