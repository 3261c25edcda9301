use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use wortwirbel_config::generator::GeneratorConfig;
use wortwirbel_core::{CatalogWord, LanguageProcessor, VocabularyEntry};
use wortwirbel_io::VocabularyStore;
use wortwirbel_translator::TranslationLookup;

/// Outcome of one generator run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
    pub written: Vec<PathBuf>,
}

pub struct Generator {
    processor: Arc<dyn LanguageProcessor>,
    lookup: Option<Arc<dyn TranslationLookup>>,
    store: VocabularyStore,
    count: usize,
    avoid_duplicates: bool,
    write_delay: Duration,
}

impl Generator {
    pub fn new(
        processor: Arc<dyn LanguageProcessor>,
        store: VocabularyStore,
        config: &GeneratorConfig,
    ) -> Self {
        Self {
            processor,
            lookup: None,
            store,
            count: config.count,
            avoid_duplicates: config.avoid_duplicates,
            write_delay: Duration::from_millis(config.write_delay_ms),
        }
    }

    pub fn with_lookup(mut self, lookup: Arc<dyn TranslationLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Build and persist up to `count` new entries, in catalog order
    pub async fn run(&self, catalog: &[CatalogWord]) -> GenerationReport {
        println!("Generating {} vocabulary entries...", self.count);
        tracing::info!(
            language = self.processor.language_code(),
            avoid_duplicates = self.avoid_duplicates,
            "Generation started"
        );

        let mut known = if self.avoid_duplicates {
            self.store.known_headwords()
        } else {
            HashSet::new()
        };

        let mut report = GenerationReport::default();

        for word in catalog {
            if report.saved >= self.count {
                break;
            }

            let word = self.resolve(word).await;

            let entry = match self.processor.build_entry(&word) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::error!("Failed to build entry for {:?}: {}", word.german, e);
                    println!("Failed: {}: {}", word.german, e);
                    report.failed += 1;
                    continue;
                }
            };

            if self.avoid_duplicates && known.contains(&entry.duplicate_key()) {
                println!("Skipping duplicate: {}", entry.german);
                report.skipped += 1;
                continue;
            }

            match self.persist(&entry) {
                Ok(path) => {
                    println!("Saved: {} -> {}", entry.german, path.display());
                    known.insert(entry.duplicate_key());
                    report.saved += 1;
                    report.written.push(path);
                }
                Err(e) => {
                    tracing::error!("Error saving entry {}: {}", entry.german, e);
                    println!("Failed: {}: {}", entry.german, e);
                    report.failed += 1;
                }
            }

            if !self.write_delay.is_zero() {
                tokio::time::sleep(self.write_delay).await;
            }
        }

        println!("Successfully generated {} vocabulary entries!", report.saved);
        tracing::info!(
            saved = report.saved,
            skipped = report.skipped,
            failed = report.failed,
            "Generation finished"
        );

        report
    }

    /// Ask the lookup for better data, keeping the catalog triple on any miss
    async fn resolve(&self, word: &CatalogWord) -> CatalogWord {
        let Some(lookup) = &self.lookup else {
            return word.clone();
        };

        match lookup.lookup_translation(&word.german).await {
            Ok(Some(found)) => {
                tracing::debug!("Lookup hit for {}: {}", word.german, found.english);
                CatalogWord {
                    german: word.german.clone(),
                    english: found.english,
                    part_of_speech: found.part_of_speech,
                }
            }
            Ok(None) => word.clone(),
            Err(e) => {
                tracing::warn!("Error looking up {}: {}", word.german, e);
                word.clone()
            }
        }
    }

    fn persist(&self, entry: &VocabularyEntry) -> anyhow::Result<PathBuf> {
        let stem = self.processor.filename_stem(&entry.german)?;
        Ok(self.store.save(entry, &stem)?)
    }
}
