//! Pairing of component sources with their documentation files.
//!
//! Each documentation file is claimed at most once. Whatever remains in the
//! [`DocPool`] after pairing becomes an orphan record.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::discovery::{SourceFile, absolute_path};
use crate::extract::{ExtractError, MetadataExtractor};
use crate::metadata::MetadataRecord;

/// Documentation paths not yet attached to a record, in discovery order.
#[derive(Debug, Default, Clone)]
pub struct DocPool {
    unclaimed: IndexSet<String>,
    claimed: HashSet<String>,
}

impl DocPool {
    pub fn new(docs: impl IntoIterator<Item = String>) -> Self {
        Self {
            unclaimed: docs.into_iter().collect(),
            claimed: HashSet::new(),
        }
    }

    /// Remove `path` from the pool. Returns whether it was unclaimed.
    pub fn claim(&mut self, path: &str) -> bool {
        if self.unclaimed.shift_remove(path) {
            self.claimed.insert(path.to_string());
            true
        } else {
            false
        }
    }

    /// Whether an earlier source already took `path`.
    pub fn is_claimed(&self, path: &str) -> bool {
        self.claimed.contains(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.unclaimed.contains(path)
    }

    pub fn len(&self) -> usize {
        self.unclaimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unclaimed.is_empty()
    }

    /// Remaining paths in discovery order.
    pub fn into_unclaimed(self) -> Vec<String> {
        self.unclaimed.into_iter().collect()
    }
}

/// Outcome of pairing a single source file.
#[derive(Debug)]
pub enum Paired {
    /// Record produced, possibly without documentation.
    Record(MetadataRecord),
    /// Secondary molecule file, not a component entry.
    Skipped,
    /// Extraction failed; no record.
    Failed(ExtractError),
}

/// Runs the extractor over sources and attaches documentation.
pub struct Pairer<'a> {
    root: &'a Path,
    extractor: &'a mut dyn MetadataExtractor,
    pool: DocPool,
}

impl<'a> Pairer<'a> {
    pub fn new(root: &'a Path, extractor: &'a mut dyn MetadataExtractor, pool: DocPool) -> Self {
        Self {
            root,
            extractor,
            pool,
        }
    }

    /// Pair one source file. Per-file failures are logged and contained.
    pub fn pair(&mut self, source: &SourceFile) -> Paired {
        if !source.is_entry() {
            crate::debug_event!("pairing", "skipped secondary", "{}", source.path);
            return Paired::Skipped;
        }

        let metadata = match self.read_and_extract(source) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Could not parse metadata for {}: {e}", source.path);
                return Paired::Failed(e);
            }
        };

        let mut record = MetadataRecord::component(&source.path, metadata);
        record.documentation = self.claim_documentation(source);
        Paired::Record(record)
    }

    fn read_and_extract(
        &mut self,
        source: &SourceFile,
    ) -> Result<crate::extract::ComponentMetadata, ExtractError> {
        let file = absolute_path(self.root, &source.path);
        let code = std::fs::read_to_string(&file).map_err(|e| ExtractError::Read {
            path: source.path.clone(),
            source: e,
        })?;
        self.extractor.extract(&source.path, &code)
    }

    /// Read and claim the companion documentation, if any.
    fn claim_documentation(&mut self, source: &SourceFile) -> Option<String> {
        let Some(doc_path) = source.documentation_path() else {
            tracing::warn!("documentation not found for {}", source.path);
            return None;
        };

        if self.pool.is_claimed(&doc_path) {
            tracing::warn!(
                "documentation {doc_path} already paired with an earlier component, skipping for {}",
                source.path
            );
            return None;
        }

        let file: PathBuf = absolute_path(self.root, &doc_path);
        if !file.is_file() {
            tracing::warn!("documentation not found for {}", source.path);
            return None;
        }

        match read_documentation(&file) {
            Ok(text) => {
                self.pool.claim(&doc_path);
                crate::debug_event!("pairing", "paired", "{} <- {doc_path}", source.path);
                Some(text)
            }
            Err(e) => {
                tracing::warn!("Could not read documentation {doc_path}: {e}");
                None
            }
        }
    }

    /// Hand back the pool with whatever was not claimed.
    pub fn into_pool(self) -> DocPool {
        self.pool
    }
}

/// Read a documentation file, replacing invalid UTF-8 sequences.
pub fn read_documentation(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
