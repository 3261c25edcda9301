use std::sync::Arc;

use wortwirbel_core::CatalogWord;

/// Dictionary lookup collaborator.
///
/// Implementations may return `Ok(None)` for any word at any time; callers
/// fall back to their own catalog data.
#[async_trait::async_trait]
pub trait TranslationLookup: Send + Sync {
    /// Look up a German headword, returning its gloss and part of speech
    async fn lookup_translation(&self, word: &str) -> Result<Option<CatalogWord>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Unsupported lookup provider: {0}")]
    UnsupportedProvider(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Lookup that never knows any word
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLookup;

#[async_trait::async_trait]
impl TranslationLookup for NullLookup {
    async fn lookup_translation(&self, _word: &str) -> Result<Option<CatalogWord>, LookupError> {
        Ok(None)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "none".to_string(),
            requires_api_key: false,
        }
    }
}

/// Resolve a configured provider name
pub fn lookup_for_provider(provider: &str) -> Result<Arc<dyn TranslationLookup>, LookupError> {
    match provider.trim().to_lowercase().as_str() {
        "" | "none" => Ok(Arc::new(NullLookup)),
        other => Err(LookupError::UnsupportedProvider(other.to_string())),
    }
}
