use std::path::Path;

use wortwirbel_core::CatalogWord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Built-in A1 sample words: (german, english, part of speech)
const A1_WORDS: &[(&str, &str, &str)] = &[
    ("Katze", "cat", "noun"),
    ("laufen", "to run", "verb"),
    ("rot", "red", "adjective"),
    ("Schule", "school", "noun"),
    ("trinken", "to drink", "verb"),
    ("groß", "big", "adjective"),
    ("Fenster", "window", "noun"),
    ("sprechen", "to speak", "verb"),
    ("klein", "small", "adjective"),
    ("Küche", "kitchen", "noun"),
    ("fahren", "to drive", "verb"),
    ("schnell", "fast", "adjective"),
    ("Garten", "garden", "noun"),
    ("essen", "to eat", "verb"),
    ("neu", "new", "adjective"),
];

pub struct CatalogLoader;

impl CatalogLoader {
    /// The built-in A1 word list
    pub fn a1_defaults() -> Vec<CatalogWord> {
        A1_WORDS
            .iter()
            .map(|(german, english, pos)| CatalogWord::new(german, english, pos))
            .collect()
    }

    /// Load a catalog from a JSON array of `{german, english, part_of_speech}`
    pub fn load_from_file(path: &Path) -> Result<Vec<CatalogWord>, CatalogError> {
        tracing::info!("Loading catalog from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let words = Self::from_json(&json)?;
        tracing::info!("Loaded {} catalog words from file", words.len());
        Ok(words)
    }

    pub fn from_json(json: &str) -> Result<Vec<CatalogWord>, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}
