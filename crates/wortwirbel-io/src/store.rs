use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use wortwirbel_core::VocabularyEntry;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no usable letter directory for headword {0:?}")]
    InvalidLetterDir(String),
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Only the field the duplicate scan needs
#[derive(Deserialize)]
struct StoredHeadword {
    german: String,
}

/// One JSON file per entry under `<root>/<first letter>/<stem>.json`
#[derive(Debug, Clone)]
pub struct VocabularyStore {
    root: PathBuf,
}

impl VocabularyStore {
    /// Open the store, creating the root directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where an entry with this headword and file stem lives
    pub fn entry_path(&self, headword: &str, stem: &str) -> Result<PathBuf, StoreError> {
        let letter = letter_dir(headword)
            .ok_or_else(|| StoreError::InvalidLetterDir(headword.to_string()))?;
        Ok(self.root.join(letter).join(format!("{stem}.json")))
    }

    /// Lowercased headwords of every readable entry already on disk.
    ///
    /// Only `.json` files directly inside single-character subdirectories are
    /// considered. Unreadable or malformed files are logged and skipped.
    pub fn known_headwords(&self) -> HashSet<String> {
        let mut known = HashSet::new();

        let dirs = match fs::read_dir(&self.root) {
            Ok(dirs) => dirs,
            Err(e) => {
                tracing::warn!("Failed to scan {}: {}", self.root.display(), e);
                return known;
            }
        };

        for dir in dirs.flatten() {
            let path = dir.path();
            if !path.is_dir() || !is_letter_dir(&path) {
                continue;
            }

            let files = match fs::read_dir(&path) {
                Ok(files) => files,
                Err(e) => {
                    tracing::warn!("Failed to read directory {}: {}", path.display(), e);
                    continue;
                }
            };

            for file in files.flatten() {
                let file_path = file.path();
                if !file_path.is_file() || file_path.extension().is_none_or(|ext| ext != "json") {
                    continue;
                }

                match read_headword(&file_path) {
                    Ok(headword) => {
                        known.insert(headword.to_lowercase());
                    }
                    Err(e) => tracing::warn!("Error reading {}: {}", file_path.display(), e),
                }
            }
        }

        tracing::debug!("Found {} existing headwords", known.len());
        known
    }

    /// Write an entry, replacing any file already at its path
    pub fn save(&self, entry: &VocabularyEntry, stem: &str) -> Result<PathBuf, StoreError> {
        let path = self.entry_path(&entry.german, stem)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json = render_entry(entry)?;
        fs::write(&path, json).map_err(|e| StoreError::io(&path, e))?;

        Ok(path)
    }
}

/// Pretty-printed JSON with a trailing newline. Non-ASCII stays verbatim.
pub fn render_entry(entry: &VocabularyEntry) -> Result<String, StoreError> {
    let mut json = serde_json::to_string_pretty(entry)?;
    json.push('\n');
    Ok(json)
}

/// First character of the lowercased headword. Lowercasing may expand one
/// char into several ("İ" -> "i\u{307}"), so only the first is kept; the
/// scan looks at single-character directories only.
fn letter_dir(headword: &str) -> Option<String> {
    let letter = headword.to_lowercase().chars().next()?.to_string();

    let mut components = Path::new(&letter).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(letter),
        _ => None,
    }
}

fn is_letter_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.chars().count() == 1)
}

fn read_headword(path: &Path) -> Result<String, StoreError> {
    let data = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let stored: StoredHeadword = serde_json::from_str(&data)?;
    Ok(stored.german)
}

#[cfg(test)]
mod tests {
    use wortwirbel_core::Article;

    use super::*;

    fn katze() -> VocabularyEntry {
        VocabularyEntry {
            german: "Katze".to_string(),
            english: "cat".to_string(),
            part_of_speech: "noun".to_string(),
            article: Some(Article::Der),
            example_sentence: "der Katze ist schön.".to_string(),
        }
    }

    #[test]
    fn test_open_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data/languages/german/words");

        let store = VocabularyStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());

        // idempotent
        VocabularyStore::open(&root).unwrap();
    }

    #[test]
    fn test_save_writes_expected_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();

        let path = store.save(&katze(), "katze").unwrap();
        assert_eq!(path, dir.path().join("k").join("katze.json"));

        let written = fs::read_to_string(&path).unwrap();
        let expected = "{\n  \"german\": \"Katze\",\n  \"english\": \"cat\",\n  \"part_of_speech\": \"noun\",\n  \"article\": \"der\",\n  \"example_sentence\": \"der Katze ist schön.\"\n}\n";
        assert_eq!(written, expected);
    }

    #[test]
    fn test_save_writes_null_article() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();

        let entry = VocabularyEntry {
            german: "Groß".to_string(),
            english: "big".to_string(),
            part_of_speech: "adjective".to_string(),
            article: None,
            example_sentence: "Das ist Groß.".to_string(),
        };
        let path = store.save(&entry, "gross").unwrap();
        assert_eq!(path, dir.path().join("g").join("gross.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"article\": null"));
        assert!(written.contains("Groß"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();

        let mut entry = katze();
        store.save(&entry, "katze").unwrap();
        entry.english = "kitty".to_string();
        let path = store.save(&entry, "katze").unwrap();

        let written: VocabularyEntry =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written.english, "kitty");
    }

    #[test]
    fn test_known_headwords_are_lowercased() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();
        store.save(&katze(), "katze").unwrap();

        let known = store.known_headwords();
        assert_eq!(known.len(), 1);
        assert!(known.contains("katze"));
    }

    #[test]
    fn test_scan_skips_bad_files_and_other_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();
        store.save(&katze(), "katze").unwrap();

        fs::write(dir.path().join("k").join("broken.json"), "{ nope").unwrap();
        fs::write(dir.path().join("k").join("nogerman.json"), r#"{"english": "x"}"#).unwrap();
        fs::write(dir.path().join("k").join("notes.txt"), r#"{"german": "Text"}"#).unwrap();

        fs::create_dir_all(dir.path().join("archive")).unwrap();
        fs::write(dir.path().join("archive").join("alt.json"), r#"{"german": "Alt"}"#).unwrap();
        fs::write(dir.path().join("top.json"), r#"{"german": "Oben"}"#).unwrap();

        let known = store.known_headwords();
        assert_eq!(known, HashSet::from(["katze".to_string()]));
    }

    #[test]
    fn test_non_ascii_letter_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();

        let mut entry = katze();
        entry.german = "Übung".to_string();
        let path = store.save(&entry, "uebung").unwrap();
        assert_eq!(path, dir.path().join("ü").join("uebung.json"));
        assert!(store.known_headwords().contains("übung"));
    }

    #[test]
    fn test_empty_headword() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.entry_path("", "x"),
            Err(StoreError::InvalidLetterDir(_))
        ));
    }

    #[test]
    fn test_headwords_cannot_escape_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();

        for headword in ["/wortwirbel", ".punkt", ".."] {
            assert!(
                matches!(
                    store.entry_path(headword, "x"),
                    Err(StoreError::InvalidLetterDir(_))
                ),
                "{headword}"
            );
        }

        let mut entry = katze();
        entry.german = "/wortwirbel".to_string();
        assert!(store.save(&entry, "wortwirbel").is_err());
        entry.german = ".punkt".to_string();
        assert!(store.save(&entry, "punkt").is_err());
        assert!(!dir.path().join("punkt.json").exists());
    }

    #[test]
    fn test_expanding_lowercase_keeps_one_letter() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyStore::open(dir.path()).unwrap();

        let mut entry = katze();
        entry.german = "İstanbul".to_string();
        let path = store.save(&entry, "istanbul").unwrap();
        assert_eq!(path, dir.path().join("i").join("istanbul.json"));
        assert!(store.known_headwords().contains(&"İstanbul".to_lowercase()));
    }
}
