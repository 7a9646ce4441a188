//! Records for documentation files that no component claimed.

use std::path::Path;

use crate::discovery::{DOC_EXTENSION, absolute_path, file_name};
use crate::metadata::MetadataRecord;
use crate::pairing::{DocPool, read_documentation};

/// Display name for a documentation file: its stem with the first character upper-cased.
pub fn orphan_display_name(path: &str) -> String {
    let name = file_name(path);
    let stem = name
        .strip_suffix(&format!(".{DOC_EXTENSION}"))
        .unwrap_or(name);
    capitalize(stem)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build one minimal record per unclaimed documentation file, in pool order.
///
/// Unreadable files are logged and left out.
pub fn orphan_records(root: &Path, pool: DocPool) -> Vec<MetadataRecord> {
    pool.into_unclaimed()
        .into_iter()
        .filter_map(|path| {
            match read_documentation(&absolute_path(root, &path)) {
                Ok(text) => {
                    crate::debug_event!("orphans", "documentation only", "{path}");
                    let display_name = orphan_display_name(&path);
                    Some(MetadataRecord::orphan(path, display_name, text))
                }
                Err(e) => {
                    tracing::warn!("Could not read documentation {path}: {e}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_orphan_display_name() {
        assert_eq!(
            orphan_display_name("src/components/atoms/Legacy.md"),
            "Legacy"
        );
        assert_eq!(
            orphan_display_name("src/components/molecules/Grid/grid.md"),
            "Grid"
        );
        assert_eq!(orphan_display_name("src/components/atoms/émoji.md"), "Émoji");
        assert_eq!(orphan_display_name("src/components/atoms/.md"), "");
    }

    #[test]
    fn test_orphan_records_in_pool_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let atoms = root.join("src/components/atoms");
        fs::create_dir_all(&atoms).unwrap();
        fs::write(atoms.join("Zeta.md"), "zeta").unwrap();
        fs::write(atoms.join("alpha.md"), "alpha").unwrap();

        let pool = DocPool::new(vec![
            "src/components/atoms/Zeta.md".to_string(),
            "src/components/atoms/alpha.md".to_string(),
        ]);
        let records = orphan_records(root, pool);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_name, "Zeta");
        assert_eq!(records[1].display_name, "Alpha");
        assert_eq!(records[1].filepath, "src/components/atoms/alpha.md");
        assert_eq!(records[1].documentation.as_deref(), Some("alpha"));
        assert!(records.iter().all(MetadataRecord::is_orphan));
    }

    #[test]
    fn test_unreadable_orphan_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let pool = DocPool::new(vec!["src/components/atoms/Gone.md".to_string()]);

        assert!(orphan_records(temp_dir.path(), pool).is_empty());
    }
}
