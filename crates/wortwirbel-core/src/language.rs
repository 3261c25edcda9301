use crate::error::CoreError;
use crate::types::{Article, CatalogWord, VocabularyEntry};

/// Entry-building interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "de", "nl", ...)
    fn language_code(&self) -> &str;

    /// Canonical headword form.
    ///
    /// Applied to every word class, so verbs and adjectives get a capital
    /// first letter too ("laufen" is stored as "Laufen"), unlike the casing
    /// of the published word lists.
    fn normalize(&self, text: &str) -> String;

    /// Grammatical article for a headword, None for non-nouns
    fn article(&self, headword: &str, part_of_speech: &str) -> Option<Article>;

    /// Example sentence for a finalized headword
    fn example_sentence(
        &self,
        headword: &str,
        part_of_speech: &str,
        article: Option<Article>,
    ) -> String;

    /// Filesystem-safe identifier for a headword
    fn filename_stem(&self, headword: &str) -> Result<String, CoreError>;

    /// Turn a catalog triple into a finalized entry
    fn build_entry(&self, word: &CatalogWord) -> Result<VocabularyEntry, CoreError> {
        let german = self.normalize(&word.german);
        if german.is_empty() {
            return Err(CoreError::EmptyHeadword);
        }

        let article = self.article(&german, &word.part_of_speech);
        let example_sentence = self.example_sentence(&german, &word.part_of_speech, article);

        Ok(VocabularyEntry {
            german,
            english: word.english.clone(),
            part_of_speech: word.part_of_speech.clone(),
            article,
            example_sentence,
        })
    }
}
