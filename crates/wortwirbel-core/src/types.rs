use std::fmt;

use serde::{Deserialize, Serialize};

/// A finalized vocabulary record, as persisted on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub german: String,
    pub english: String,
    pub part_of_speech: String,
    pub article: Option<Article>,
    pub example_sentence: String,
}

impl VocabularyEntry {
    /// Key under which two entries count as duplicates
    pub fn duplicate_key(&self) -> String {
        self.german.to_lowercase()
    }
}

/// One (word, translation, part of speech) triple of a source catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogWord {
    pub german: String,
    pub english: String,
    pub part_of_speech: String,
}

impl CatalogWord {
    pub fn new(german: &str, english: &str, part_of_speech: &str) -> Self {
        Self {
            german: german.to_string(),
            english: english.to_string(),
            part_of_speech: part_of_speech.to_string(),
        }
    }
}

/// Coarse word class used to pick articles and sentence templates.
/// The free-form tag itself is kept on the entry untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Other,
}

impl WordClass {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "noun" => WordClass::Noun,
            "verb" => WordClass::Verb,
            "adjective" => WordClass::Adjective,
            _ => WordClass::Other,
        }
    }
}

/// German definite article (nominative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }

    /// Accusative form: only the masculine article changes
    pub fn accusative(&self) -> &'static str {
        match self {
            Article::Der => "den",
            Article::Die => "die",
            Article::Das => "das",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_class_is_case_insensitive() {
        assert_eq!(WordClass::from_tag("Noun"), WordClass::Noun);
        assert_eq!(WordClass::from_tag("VERB"), WordClass::Verb);
        assert_eq!(WordClass::from_tag("adjective"), WordClass::Adjective);
        assert_eq!(WordClass::from_tag("adverb"), WordClass::Other);
        assert_eq!(WordClass::from_tag(""), WordClass::Other);
    }

    #[test]
    fn test_accusative_articles() {
        assert_eq!(Article::Der.accusative(), "den");
        assert_eq!(Article::Die.accusative(), "die");
        assert_eq!(Article::Das.accusative(), "das");
    }

    #[test]
    fn test_duplicate_key_ignores_case() {
        let a = VocabularyEntry {
            german: "Katze".to_string(),
            english: "cat".to_string(),
            part_of_speech: "noun".to_string(),
            article: Some(Article::Der),
            example_sentence: "der Katze ist schön.".to_string(),
        };
        let mut b = a.clone();
        b.german = "KATZE".to_string();

        assert_eq!(a.duplicate_key(), b.duplicate_key());
    }

    #[test]
    fn test_missing_article_serializes_as_null() {
        let entry = VocabularyEntry {
            german: "Rot".to_string(),
            english: "red".to_string(),
            part_of_speech: "adjective".to_string(),
            article: None,
            example_sentence: "Das ist Rot.".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"article\":null"));
    }
}
