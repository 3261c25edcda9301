pub mod error;
pub mod language;
pub mod preprocess;
pub mod types;

pub use error::CoreError;
pub use language::LanguageProcessor;
pub use types::{Article, CatalogWord, VocabularyEntry, WordClass};
