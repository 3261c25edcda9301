use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in A1 word list
    pub path: Option<String>,
}
