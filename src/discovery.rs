//! File discovery for the component tree.
//!
//! The layout is a fixed convention under the project root:
//!
//! ```text
//! src/components/atoms/**/*.js       flat single-file components
//! src/components/atoms/**/*.md
//! src/components/molecules/**/*.js   index.js is the entry, the rest are secondary
//! src/components/molecules/**/*.md
//! ```
//!
//! Matching is path-pattern based only. File contents are never inspected.
//! Hidden files and anything under hidden directories are skipped.

use std::path::{Path, PathBuf};

use glob::MatchOptions;

use crate::pipeline::PipelineError;

/// Components directory, relative to the project root.
pub const COMPONENTS_DIR: &str = "src/components";

/// Extension of component source files.
pub const SOURCE_EXTENSION: &str = "js";

/// Extension of documentation files.
pub const DOC_EXTENSION: &str = "md";

/// Entry file of a molecule directory.
pub const MOLECULE_ENTRY: &str = "index.js";

/// Component category, each with its own documentation naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Single-file leaf component: `Button.js` documented by `Button.md`.
    Atom,
    /// Directory component: `Card/index.js` documented by `Card/Card.md`.
    Molecule,
}

impl Category {
    /// All categories in discovery order.
    pub const ALL: [Category; 2] = [Category::Atom, Category::Molecule];

    /// Directory name under `src/components`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Atom => "atoms",
            Category::Molecule => "molecules",
        }
    }

    /// Derive the documentation path for a source path of this category.
    ///
    /// Pure suffix replacement. Returns `None` when the path does not follow
    /// the category's naming convention.
    pub fn documentation_path(&self, source: &str) -> Option<String> {
        match self {
            Category::Atom => {
                let stem = source.strip_suffix(&format!(".{SOURCE_EXTENSION}"))?;
                Some(format!("{stem}.{DOC_EXTENSION}"))
            }
            Category::Molecule => {
                let dir = source.strip_suffix(MOLECULE_ENTRY)?;
                let dir_name = dir.trim_end_matches('/').rsplit('/').next()?;
                if dir_name.is_empty() {
                    return None;
                }
                Some(format!("{dir}{dir_name}.{DOC_EXTENSION}"))
            }
        }
    }
}

/// A discovered component source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Root-relative, `/`-separated path.
    pub path: String,
    pub category: Category,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, category: Category) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }

    /// Whether this file is a component entry point.
    ///
    /// Every atom file is an entry. Only `index.js` is an entry in a molecule.
    pub fn is_entry(&self) -> bool {
        match self.category {
            Category::Atom => true,
            Category::Molecule => file_name(&self.path) == MOLECULE_ENTRY,
        }
    }

    /// Expected companion documentation path.
    pub fn documentation_path(&self) -> Option<String> {
        self.category.documentation_path(&self.path)
    }
}

/// Result of one discovery pass.
#[derive(Debug, Default, Clone)]
pub struct Discovered {
    /// Source files, path-sorted.
    pub sources: Vec<SourceFile>,
    /// Documentation files, path-sorted.
    pub docs: Vec<String>,
}

/// Enumerate source and documentation files under `root`.
///
/// Fails only when `root` is not a readable directory or a pattern is invalid.
/// A missing `src/components` yields an empty result.
pub fn discover(root: &Path) -> Result<Discovered, PipelineError> {
    if !root.is_dir() {
        return Err(PipelineError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let mut discovered = Discovered::default();
    for category in Category::ALL {
        for path in glob_relative(root, category, SOURCE_EXTENSION)? {
            discovered.sources.push(SourceFile::new(path, category));
        }
        discovered
            .docs
            .extend(glob_relative(root, category, DOC_EXTENSION)?);
    }

    discovered.sources.sort_by(|a, b| a.path.cmp(&b.path));
    discovered.docs.sort();

    crate::debug_event!(
        "discovery",
        "found",
        "{} sources, {} docs",
        discovered.sources.len(),
        discovered.docs.len()
    );

    Ok(discovered)
}

/// Glob `src/components/<category>/**/*.<ext>` and return root-relative paths.
fn glob_relative(
    root: &Path,
    category: Category,
    extension: &str,
) -> Result<Vec<String>, PipelineError> {
    let base = root.join(COMPONENTS_DIR).join(category.dir_name());
    let pattern = format!(
        "{}/**/*.{extension}",
        glob::Pattern::escape(&base.to_string_lossy())
    );

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob::glob_with(&pattern, options).map_err(|e| PipelineError::Pattern {
        pattern: pattern.clone(),
        reason: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => {
                if let Some(relative) = relative_path(root, &path) {
                    paths.push(relative);
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[discovery] skipping unreadable path: {e}");
            }
        }
    }
    Ok(paths)
}

/// Root-relative path with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Resolve a root-relative path back onto the file system.
pub fn absolute_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(root.to_path_buf(), |acc, part| acc.join(part))
}

/// Last `/`-separated segment.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
