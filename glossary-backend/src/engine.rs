//! DefinitionEngine: owns the settings and the definition map
//!
//! Scans are async (they read documents through a `Vault`) and serialized:
//! a second scan waits for the first to finish. Each scan builds a fresh map
//! and swaps it in at the end, so lookups never see a half-built map and
//! definitions removed from the document disappear after a rescan.
//! Lookups are synchronous and only take a read lock.

use crate::config::Config;
use crate::definitions::extractor::{extract_definitions, is_definitions_document};
use crate::definitions::marker::{copy_path, derived_path, mark_terms};
use crate::definitions::resolver::resolve;
use crate::definitions::DefinitionMap;
use crate::error::Result;
use crate::render::render_marked_span;
use crate::settings;
use crate::vault::{DocumentHandle, Vault};
use glossary_types::{DefinitionSettings, RenderedTerm, ScanReport};
use parking_lot::RwLock;
use tokio::sync::Mutex;

pub struct DefinitionEngine {
    settings: RwLock<DefinitionSettings>,
    definitions: RwLock<DefinitionMap>,
    scan_lock: Mutex<()>,
}

impl DefinitionEngine {
    pub fn new(settings: DefinitionSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
            definitions: RwLock::new(DefinitionMap::new()),
            scan_lock: Mutex::new(()),
        }
    }

    /// Engine with settings loaded from the configured settings file
    pub fn from_config(config: &Config) -> Self {
        Self::new(settings::load_settings(&config.settings_path))
    }

    pub fn settings(&self) -> DefinitionSettings {
        self.settings.read().clone()
    }

    /// Replace the settings. A changed filename takes effect on the next scan.
    pub fn update_settings(&self, settings: DefinitionSettings) {
        *self.settings.write() = settings;
    }

    /// Rebuild the definition map from every document named like the
    /// configured filename.
    ///
    /// A document that fails to read is logged and listed in
    /// `failed_documents`; definitions from the other documents are still
    /// installed. If the vault cannot be listed the previous map is kept.
    pub async fn scan(&self, vault: &dyn Vault) -> Result<ScanReport> {
        let _guard = self.scan_lock.lock().await;

        let target = self.settings.read().filename.clone();
        let documents = vault.list_documents().await?;

        let mut map = DefinitionMap::new();
        let mut report = ScanReport::default();

        for doc in documents
            .iter()
            .filter(|d| is_definitions_document(&d.name, &target))
        {
            match vault.read(doc).await {
                Ok(text) => {
                    let found = extract_definitions(&text, &mut map);
                    log::debug!("[GLOSSARY] {} definitions in {}", found, doc.path);
                    report.definitions_found += found;
                    report.documents_scanned += 1;
                }
                Err(e) => {
                    log::warn!("[GLOSSARY] Failed to read {}: {}", doc.path, e);
                    report.failed_documents.push(doc.path.clone());
                }
            }
        }

        if report.documents_scanned == 0 && report.failed_documents.is_empty() {
            log::info!("[GLOSSARY] No document named '{}' in vault", target);
        }

        report.term_count = map.len();
        *self.definitions.write() = map;

        log::info!(
            "[GLOSSARY] Found {} definitions ({} terms) in {} document(s)",
            report.definitions_found,
            report.term_count,
            report.documents_scanned
        );
        Ok(report)
    }

    /// Definition for a marked term, with the singular/plural fallback
    pub fn resolve(&self, term: &str) -> Option<String> {
        resolve(term, &self.definitions.read())
            .definition()
            .map(str::to_string)
    }

    /// Tooltip body for a marked term: the trimmed definition or the
    /// "no definition" message
    pub fn tooltip_text(&self, term: &str) -> String {
        let definitions = self.definitions.read();
        match resolve(term, &definitions).definition() {
            Some(def) => def.trim().to_string(),
            None => glossary_types::NO_DEFINITION_FOUND.to_string(),
        }
    }

    /// Presentation data for an inline code span, `None` unless it is marked
    pub fn render_span(&self, code_text: &str) -> Option<RenderedTerm> {
        let settings = self.settings.read();
        render_marked_span(code_text, &self.definitions.read(), &settings)
    }

    /// Copy of the current map
    pub fn snapshot(&self) -> DefinitionMap {
        self.definitions.read().clone()
    }

    pub fn term_count(&self) -> usize {
        self.definitions.read().len()
    }

    fn known_terms(&self) -> Vec<String> {
        self.definitions.read().terms().map(str::to_string).collect()
    }

    /// Write a copy of `doc` with every known term marked, next to the
    /// original (`Note.md` -> `Note_copy.md`). Returns the new document.
    pub async fn mark_document(&self, vault: &dyn Vault, doc: &DocumentHandle) -> Result<DocumentHandle> {
        let content = vault.read(doc).await?;
        let terms = self.known_terms();
        let marked = mark_terms(&content, &terms);

        let created = vault.create(&copy_path(&doc.path), &marked).await?;
        log::info!(
            "[GLOSSARY] Marked {} against {} terms -> {}",
            doc.path,
            terms.len(),
            created.path
        );
        Ok(created)
    }

    /// Write the current map as pretty JSON next to `doc`
    /// (`Definitions.md` -> `Definitions_json.md`), for debugging.
    pub async fn write_debug_dump(&self, vault: &dyn Vault, doc: &DocumentHandle) -> Result<DocumentHandle> {
        let json = self.definitions.read().to_json_pretty()?;
        vault.create(&derived_path(&doc.path, "_json"), &json).await
    }
}

impl Default for DefinitionEngine {
    fn default() -> Self {
        Self::new(DefinitionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::unmark_terms;
    use crate::error::GlossaryError;
    use crate::vault::{FsVault, MemoryVault};
    use glossary_types::NO_DEFINITION_FOUND;
    use std::fs;
    use tempfile::tempdir;

    const SCENARIO: &str =
        "cat, cats: a small domesticated feline\nnot a def line\ndog: a domesticated canine";

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn scenario_vault() -> MemoryVault {
        MemoryVault::from_documents([
            ("Definitions.md", SCENARIO),
            ("Journal/Monday.md", "horse: not scanned"),
        ])
    }

    #[tokio::test]
    async fn test_scan_scenario() {
        init_logging();
        let engine = DefinitionEngine::default();
        let report = engine.scan(&scenario_vault()).await.unwrap();

        assert_eq!(report.definitions_found, 2);
        assert_eq!(report.documents_scanned, 1);
        assert_eq!(report.term_count, 3);
        assert!(report.is_complete());
        assert_eq!(report.notice(), "Found 2 definitions.");

        assert_eq!(engine.resolve("cat").as_deref(), Some(" a small domesticated feline"));
        assert_eq!(engine.resolve("Cats").as_deref(), Some(" a small domesticated feline"));
        assert_eq!(engine.resolve("dog").as_deref(), Some(" a domesticated canine"));
        assert_eq!(engine.resolve("horse"), None);
        assert_eq!(engine.resolve("elephant"), None);
    }

    #[tokio::test]
    async fn test_scan_without_definitions_document() {
        let engine = DefinitionEngine::default();
        let vault = MemoryVault::from_documents([("Notes.md", "cat: a feline")]);

        let report = engine.scan(&vault).await.unwrap();
        assert_eq!(report.definitions_found, 0);
        assert_eq!(report.documents_scanned, 0);
        assert_eq!(engine.term_count(), 0);
        assert_eq!(report.notice(), "Found 0 definitions.");
    }

    #[tokio::test]
    async fn test_rescan_drops_stale_entries() {
        let engine = DefinitionEngine::default();
        let vault = MemoryVault::from_documents([("Definitions.md", "cat: a feline\ndog: a canine")]);
        engine.scan(&vault).await.unwrap();
        assert!(engine.resolve("dog").is_some());

        vault.insert("Definitions.md", "cat: a feline");
        let report = engine.scan(&vault).await.unwrap();
        assert_eq!(report.term_count, 1);
        assert!(engine.resolve("dog").is_none());
        assert!(engine.resolve("cat").is_some());
    }

    #[tokio::test]
    async fn test_changed_filename_applies_on_next_scan() {
        let engine = DefinitionEngine::default();
        let vault = MemoryVault::from_documents([
            ("Definitions.md", "cat: a feline"),
            ("Glossary.md", "dog: a canine"),
        ]);
        engine.scan(&vault).await.unwrap();

        engine.update_settings(DefinitionSettings {
            filename: "Glossary".to_string(),
            ..Default::default()
        });
        engine.scan(&vault).await.unwrap();
        assert!(engine.resolve("dog").is_some());
        assert!(engine.resolve("cat").is_none());
    }

    #[tokio::test]
    async fn test_unreadable_document_keeps_other_definitions() {
        init_logging();
        let engine = DefinitionEngine::default();
        let vault = MemoryVault::from_documents([
            ("A/Definitions.md", "cat: a feline"),
            ("B/Definitions.md", "dog: a canine"),
        ]);
        vault.mark_unreadable("B/Definitions.md");

        let report = engine.scan(&vault).await.unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.failed_documents, vec!["B/Definitions.md".to_string()]);
        assert_eq!(report.documents_scanned, 1);
        assert!(engine.resolve("cat").is_some());
        assert!(engine.resolve("dog").is_none());
    }

    #[tokio::test]
    async fn test_concurrent_scans_are_serialized() {
        let engine = DefinitionEngine::default();
        let vault = scenario_vault();

        let (a, b) = tokio::join!(engine.scan(&vault), engine.scan(&vault));
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(engine.term_count(), 3);
    }

    #[tokio::test]
    async fn test_tooltip_and_render() {
        let engine = DefinitionEngine::default();
        engine.scan(&scenario_vault()).await.unwrap();

        assert_eq!(engine.tooltip_text("Dogs"), "a domesticated canine");
        assert_eq!(engine.tooltip_text("elephant"), NO_DEFINITION_FOUND);

        let rendered = engine.render_span(" %Cat% ").unwrap();
        assert_eq!(rendered.term, "Cat");
        assert_eq!(rendered.tooltip, "a small domesticated feline");
        assert_eq!(rendered.color, "#0000FF");
        assert!(engine.render_span("plain code").is_none());
    }

    #[tokio::test]
    async fn test_mark_document_creates_copy() {
        let engine = DefinitionEngine::default();
        let vault = scenario_vault();
        vault.insert("Pets.md", "My Cat chased two dogs.");
        engine.scan(&vault).await.unwrap();

        let doc = DocumentHandle::new("Pets.md");
        let created = engine.mark_document(&vault, &doc).await.unwrap();
        assert_eq!(created.path, "Pets_copy.md");

        let marked = vault.get("Pets_copy.md").unwrap();
        assert_eq!(marked, "My `%Cat%` chased two `%dogs%`.");
        assert_eq!(unmark_terms(&marked), "My Cat chased two dogs.");
        // original untouched
        assert_eq!(vault.get("Pets.md").as_deref(), Some("My Cat chased two dogs."));

        let again = engine.mark_document(&vault, &doc).await;
        assert!(matches!(again, Err(GlossaryError::DocumentExists(_))));
    }

    #[tokio::test]
    async fn test_fs_vault_end_to_end() {
        init_logging();
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Glossary")).unwrap();
        fs::write(dir.path().join("Glossary/Definitions.md"), SCENARIO).unwrap();
        fs::write(dir.path().join("Story.md"), "A dog met a cat.").unwrap();

        let config = Config::for_vault(dir.path());
        settings::save_settings(&config.settings_path, &DefinitionSettings::default()).unwrap();

        let engine = DefinitionEngine::from_config(&config);
        let vault = FsVault::new(&config.vault_dir);

        let report = engine.scan(&vault).await.unwrap();
        assert_eq!(report.definitions_found, 2);

        engine
            .mark_document(&vault, &DocumentHandle::new("Story.md"))
            .await
            .unwrap();
        let marked = fs::read_to_string(dir.path().join("Story_copy.md")).unwrap();
        assert_eq!(marked, "A `%dog%` met a `%cat%`.");

        let dump = engine
            .write_debug_dump(&vault, &DocumentHandle::new("Glossary/Definitions.md"))
            .await
            .unwrap();
        assert_eq!(dump.path, "Glossary/Definitions_json.md");
        let json: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("Glossary/Definitions_json.md")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["dog"], " a domesticated canine");

        // the generated copy is not a definitions document, so rescans are unaffected
        let report = engine.scan(&vault).await.unwrap();
        assert_eq!(report.documents_scanned, 1);
    }
}
