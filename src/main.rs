use anyhow::Context;
use clap::Parser;
use component_metadata::cli::Cli;
use component_metadata::{Pipeline, ReactExtractor, RebuildWatcher, Settings, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let settings = Settings::load(&root, cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;

    if cli.show_config {
        println!("{}", toml::to_string_pretty(&settings)?);
        return Ok(());
    }

    logging::init_with_config(&settings.logging);

    let extractor = ReactExtractor::new()?;
    let mut pipeline = Pipeline::new(root, Box::new(extractor));

    if !cli.watch {
        pipeline.run()?;
        return Ok(());
    }

    component_metadata::log_event!("watcher", "running in watch mode");
    let watcher = RebuildWatcher::builder()
        .pipeline(pipeline)
        .ignored(settings.watch.ignored.clone())
        .build()?;
    watcher.watch().await?;

    Ok(())
}
