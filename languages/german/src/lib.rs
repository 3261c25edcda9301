pub mod article;
pub mod catalog;
pub mod filename;
pub mod processor;
pub mod sentence;

pub use article::infer_article;
pub use catalog::{CatalogError, CatalogLoader};
pub use filename::filename_stem;
pub use processor::GermanProcessor;
pub use sentence::{example_sentence, sentence_candidates};
