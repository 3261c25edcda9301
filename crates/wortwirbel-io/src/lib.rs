mod store;

pub use store::{StoreError, VocabularyStore, render_entry};
