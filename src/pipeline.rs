//! One full metadata run: discover, pair, collect orphans, write.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::discovery::{self, absolute_path};
use crate::extract::MetadataExtractor;
use crate::metadata::{MetadataSet, OUTPUT_PATH};
use crate::orphans::orphan_records;
use crate::pairing::{DocPool, Paired, Pairer};

/// Failures that abort a run. Per-file problems never surface here.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Project root {} is not a directory", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("Invalid discovery pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub components: usize,
    pub documented: usize,
    pub orphans: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Rebuilds the metadata file for a project root.
pub struct Pipeline {
    root: PathBuf,
    extractor: Box<dyn MetadataExtractor>,
}

impl Pipeline {
    pub fn new(root: impl Into<PathBuf>, extractor: Box<dyn MetadataExtractor>) -> Self {
        Self {
            root: root.into(),
            extractor,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the output file.
    pub fn output_path(&self) -> PathBuf {
        absolute_path(&self.root, OUTPUT_PATH)
    }

    /// Build the full metadata set without writing it.
    pub fn collect(&mut self) -> Result<(MetadataSet, RunSummary), PipelineError> {
        let discovered = discovery::discover(&self.root)?;
        crate::debug_event!("docs", "extractor", "{}", self.extractor.name());
        let mut summary = RunSummary::default();
        let mut set = MetadataSet::new();

        let pool = DocPool::new(discovered.docs);
        let mut pairer = Pairer::new(&self.root, self.extractor.as_mut(), pool);
        for source in &discovered.sources {
            match pairer.pair(source) {
                Paired::Record(record) => {
                    summary.components += 1;
                    if record.documentation.is_some() {
                        summary.documented += 1;
                    }
                    set.push(record);
                }
                Paired::Skipped => summary.skipped += 1,
                Paired::Failed(_) => summary.failed += 1,
            }
        }

        let orphans = orphan_records(&self.root, pairer.into_pool());
        summary.orphans = orphans.len();
        set.extend(orphans);

        Ok((set, summary))
    }

    /// Run once and overwrite the output file.
    pub fn run(&mut self) -> Result<RunSummary, PipelineError> {
        crate::log_event!("docs", "Generating metadata");

        let (set, summary) = self.collect()?;
        let output = self.output_path();
        set.write_to(&output)?;

        crate::log_event!(
            "docs",
            "wrote",
            "{} ({} components, {} documented, {} documentation only, {} failed)",
            output.display(),
            summary.components,
            summary.documented,
            summary.orphans,
            summary.failed
        );
        Ok(summary)
    }
}
