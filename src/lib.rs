//! Component metadata generator.
//!
//! Scans `src/components/{atoms,molecules}`, extracts React component
//! metadata, pairs each component with its markdown documentation and
//! writes `src/docs/metadata.json` for the documentation site.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod extract;
pub mod logging;
pub mod metadata;
pub mod orphans;
pub mod pairing;
pub mod pipeline;
pub mod watcher;

pub use config::Settings;
pub use discovery::{Category, Discovered, SourceFile, discover};
pub use extract::{ComponentMetadata, ExtractError, MetadataExtractor, ReactExtractor};
pub use metadata::{MetadataRecord, MetadataSet, OUTPUT_PATH};
pub use pairing::{DocPool, Paired, Pairer};
pub use pipeline::{Pipeline, PipelineError, RunSummary};
pub use watcher::{RebuildWatcher, WatchError};
