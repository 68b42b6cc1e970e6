//! Settings persistence backed by a RON file.
//!
//! Stored fields are merged over the defaults, so a partial or older file
//! still loads. Anything unreadable falls back to `DefinitionSettings::default()`.

use crate::error::Result;
use glossary_types::DefinitionSettings;
use std::path::Path;

/// Parse settings from RON text
pub fn parse_settings(content: &str) -> Result<DefinitionSettings> {
    Ok(ron::from_str::<DefinitionSettings>(content)?)
}

/// Load from `path`, falling back to defaults on any error.
pub fn load_settings(path: &Path) -> DefinitionSettings {
    match std::fs::read_to_string(path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("[SETTINGS] Failed to parse {}: {}, using defaults", path.display(), e);
                DefinitionSettings::default()
            }
        },
        Err(e) => {
            log::debug!("[SETTINGS] Could not read {} ({}), using defaults", path.display(), e);
            DefinitionSettings::default()
        }
    }
}

/// Serialize to pretty RON and write to `path`.
pub fn save_settings(path: &Path, settings: &DefinitionSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let content = ron::ser::to_string_pretty(settings, pretty)?;
    std::fs::write(path, content)?;
    Ok(())
}
