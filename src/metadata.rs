//! Output records and the aggregated metadata document.

use std::path::Path;

use serde::Serialize;

use crate::extract::{ComponentDetails, ComponentMetadata};
use crate::pipeline::PipelineError;

/// Output file, relative to the project root.
pub const OUTPUT_PATH: &str = "src/docs/metadata.json";

/// One component, or one documentation file without a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub filepath: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Extractor fields; absent for orphan documentation.
    #[serde(flatten)]
    pub details: Option<ComponentDetails>,
}

impl MetadataRecord {
    /// Record for an extracted component, not yet documented.
    pub fn component(filepath: impl Into<String>, metadata: ComponentMetadata) -> Self {
        Self {
            filepath: filepath.into(),
            display_name: metadata.display_name,
            documentation: None,
            details: Some(metadata.details),
        }
    }

    /// Minimal record for a documentation file with no component.
    pub fn orphan(
        filepath: impl Into<String>,
        display_name: impl Into<String>,
        documentation: String,
    ) -> Self {
        Self {
            filepath: filepath.into(),
            display_name: display_name.into(),
            documentation: Some(documentation),
            details: None,
        }
    }

    pub fn is_orphan(&self) -> bool {
        self.details.is_none()
    }
}

/// Ordered records: paired components first, then orphans.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataSet {
    metadata: Vec<MetadataRecord>,
}

impl MetadataSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MetadataRecord) {
        self.metadata.push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = MetadataRecord>) {
        self.metadata.extend(records);
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, PipelineError> {
        serde_json::to_string_pretty(self).map_err(PipelineError::Serialize)
    }

    /// Overwrite `path` with the serialized set, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), PipelineError> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PipelineError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
