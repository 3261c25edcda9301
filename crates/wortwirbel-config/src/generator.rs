use serde::{Deserialize, Serialize};

fn default_count() -> usize {
    10
}

fn default_output_dir() -> String {
    "data/languages/german/words".to_string()
}

fn default_avoid_duplicates() -> bool {
    true
}

fn default_write_delay_ms() -> u64 {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum number of new entries persisted per run
    #[serde(default = "default_count")]
    pub count: usize,
    /// Root directory for persisted entries
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Scan existing output and skip known headwords
    #[serde(default = "default_avoid_duplicates")]
    pub avoid_duplicates: bool,
    /// Pause between writes
    #[serde(default = "default_write_delay_ms")]
    pub write_delay_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            output_dir: default_output_dir(),
            avoid_duplicates: default_avoid_duplicates(),
            write_delay_ms: default_write_delay_ms(),
        }
    }
}
