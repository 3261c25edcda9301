#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("empty headword")]
    EmptyHeadword,

    #[error("empty normalized filename for headword {0:?}")]
    EmptyFilename(String),
}
