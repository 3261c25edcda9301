use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use wortwirbel_config::Config;
use wortwirbel_core::CatalogWord;
use wortwirbel_io::VocabularyStore;
use wortwirbel_lang_german::{CatalogLoader, GermanProcessor};

mod cli;
mod generator;
mod logging;


use self::cli::Args;
use self::generator::Generator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = load_config(&args)?;

    logging::init_tracing(&config.logging);

    let catalog = load_catalog(&config)?;

    let store = VocabularyStore::open(&config.generator.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.generator.output_dir
        )
    })?;

    let mut generator = Generator::new(Arc::new(GermanProcessor::new()), store, &config.generator);

    if config.lookup.enabled {
        match wortwirbel_translator::lookup_for_provider(&config.lookup.provider) {
            Ok(lookup) => {
                let metadata = lookup.metadata();
                tracing::info!(
                    requires_api_key = metadata.requires_api_key,
                    "Using lookup provider: {}",
                    metadata.name
                );
                generator = generator.with_lookup(lookup);
            }
            Err(e) => tracing::warn!("Lookup disabled: {}", e),
        }
    }

    generator.run(&catalog).await;

    Ok(())
}

/// Defaults, then config file, then environment, then flags
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::load_from_file(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::new(),
    };

    args.apply_to(&mut config);

    Ok(config)
}

fn load_catalog(config: &Config) -> anyhow::Result<Vec<CatalogWord>> {
    match &config.catalog.path {
        Some(path) => CatalogLoader::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load catalog {path}")),
        None => Ok(CatalogLoader::a1_defaults()),
    }
}
