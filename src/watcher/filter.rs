//! Decides which file-system events trigger a rebuild.

use std::path::Path;

use notify::event::ModifyKind;
use notify::{Event, EventKind};

/// Accepts content changes and deletions outside ignored directories.
#[derive(Debug, Clone)]
pub struct EventFilter {
    ignored: Vec<String>,
}

impl EventFilter {
    pub fn new(ignored: Vec<String>) -> Self {
        Self { ignored }
    }

    /// Whether this event should re-run the pipeline.
    pub fn is_trigger(&self, event: &Event) -> bool {
        let relevant_kind = match event.kind {
            EventKind::Modify(ModifyKind::Metadata(_)) => false,
            EventKind::Modify(_) | EventKind::Remove(_) => true,
            _ => false,
        };
        relevant_kind && event.paths.iter().any(|path| !self.is_ignored(path))
    }

    /// Whether any component of `path` is an ignored directory name.
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.components().any(|component| {
            self.ignored
                .iter()
                .any(|name| component.as_os_str() == name.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, MetadataKind, RemoveKind};
    use std::path::PathBuf;

    fn filter() -> EventFilter {
        EventFilter::new(vec!["node_modules".to_string()])
    }

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_modify_and_remove_trigger() {
        let filter = filter();
        assert!(filter.is_trigger(&event(
            EventKind::Modify(ModifyKind::Data(DataChange::Content)),
            "/p/src/components/atoms/Button.js",
        )));
        assert!(filter.is_trigger(&event(
            EventKind::Remove(RemoveKind::File),
            "/p/src/components/atoms/Button.md",
        )));
    }

    #[test]
    fn test_create_and_metadata_do_not_trigger() {
        let filter = filter();
        assert!(!filter.is_trigger(&event(
            EventKind::Create(CreateKind::File),
            "/p/src/components/atoms/New.js",
        )));
        assert!(!filter.is_trigger(&event(
            EventKind::Modify(ModifyKind::Metadata(MetadataKind::AccessTime)),
            "/p/src/components/atoms/Button.js",
        )));
    }

    #[test]
    fn test_ignored_directories() {
        let filter = filter();
        assert!(!filter.is_trigger(&event(
            EventKind::Modify(ModifyKind::Any),
            "/p/src/components/atoms/node_modules/lib/index.js",
        )));
        assert!(filter.is_trigger(&event(
            EventKind::Modify(ModifyKind::Any),
            "/p/src/components/atoms/node_modules_docs.md",
        )));
    }
}
