//! Error types for metadata extraction.

use thiserror::Error;

/// Reasons a source file yields no metadata.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to initialize parser: {reason}")]
    ParserInit { reason: String },

    #[error("Cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("No suitable component definition found")]
    NoComponentDefinition,

    #[error("Multiple exported component definitions found: {names}")]
    MultipleDefinitions { names: String },
}
