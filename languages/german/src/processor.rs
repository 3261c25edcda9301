use wortwirbel_core::preprocess::{DefaultPreprocessor, Preprocessor, capitalize_headword};
use wortwirbel_core::{Article, CoreError, LanguageProcessor};

use crate::article::infer_article;
use crate::filename::filename_stem;
use crate::sentence::example_sentence;

/// German language processor
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanProcessor;

impl GermanProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for GermanProcessor {
    fn language_code(&self) -> &str {
        "de"
    }

    fn normalize(&self, text: &str) -> String {
        capitalize_headword(&DefaultPreprocessor.process(text))
    }

    fn article(&self, headword: &str, part_of_speech: &str) -> Option<Article> {
        infer_article(headword, part_of_speech)
    }

    fn example_sentence(
        &self,
        headword: &str,
        part_of_speech: &str,
        article: Option<Article>,
    ) -> String {
        example_sentence(headword, part_of_speech, article)
    }

    fn filename_stem(&self, headword: &str) -> Result<String, CoreError> {
        filename_stem(headword)
    }
}
