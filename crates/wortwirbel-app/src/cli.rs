use std::path::PathBuf;

use clap::Parser;
use wortwirbel_config::Config;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wortwirbel", about = "Generate German A1 vocabulary entries")]
pub struct Args {
    /// Number of vocabulary entries to generate (default: 10)
    #[arg(short = 'c', long)]
    pub count: Option<usize>,

    /// Output directory for vocabulary files (default: data/languages/german/words)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Allow duplicate entries (default: skip duplicates)
    #[arg(long)]
    pub allow_duplicates: bool,

    /// JSON word list replacing the built-in A1 catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pause between writes in milliseconds (default: 100)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Args {
    /// Flags override whatever the config file and environment set
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(count) = self.count {
            config.generator.count = count;
        }

        if let Some(output) = &self.output {
            config.generator.output_dir = output.display().to_string();
        }

        if self.allow_duplicates {
            config.generator.avoid_duplicates = false;
        }

        if let Some(catalog) = &self.catalog {
            config.catalog.path = Some(catalog.display().to_string());
        }

        if let Some(delay) = self.delay_ms {
            config.generator.write_delay_ms = delay;
        }
    }
}
