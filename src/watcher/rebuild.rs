//! Watcher that re-runs the full pipeline on component changes.

use std::path::PathBuf;
use std::sync::Arc;

use notify::{Event, RecursiveMode, Watcher};
use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::discovery::{COMPONENTS_DIR, absolute_path};
use crate::pipeline::Pipeline;

use super::error::WatchError;
use super::filter::EventFilter;
use super::pending::PendingRun;

/// Capacity of the event channel between notify and the loop.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Rebuilds metadata on every relevant change under `src/components`.
pub struct RebuildWatcher {
    /// Shared with the blocking task running the rebuild.
    pipeline: Arc<Mutex<Pipeline>>,
    filter: EventFilter,
    pending: PendingRun,
    /// Channel for receiving file events.
    event_rx: mpsc::Receiver<notify::Result<Event>>,
    /// The underlying file watcher.
    watcher: notify::RecommendedWatcher,
    /// Directory observed recursively.
    watch_root: PathBuf,
}

impl RebuildWatcher {
    /// Create a builder for configuring the watcher.
    pub fn builder() -> RebuildWatcherBuilder {
        RebuildWatcherBuilder::new()
    }

    /// Watch until Ctrl-C or until the event channel closes.
    ///
    /// Runs the pipeline once when ready, then once per relevant change.
    /// Changes that arrive during a run are folded into one follow-up run.
    pub async fn watch(mut self) -> Result<(), WatchError> {
        self.watcher
            .watch(&self.watch_root, RecursiveMode::Recursive)
            .map_err(|e| WatchError::PathWatchFailed {
                path: self.watch_root.clone(),
                reason: e.to_string(),
            })?;

        crate::log_event!("watcher", "watching", "{}", self.watch_root.display());
        self.pending.request();

        // Registered once for the whole session.
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            while self.pending.take() {
                tokio::select! {
                    _ = Self::rebuild(Arc::clone(&self.pipeline)) => {}
                    _ = &mut ctrl_c => {
                        crate::log_event!("watcher", "stopped");
                        return Ok(());
                    }
                }
                self.drain_events();
            }

            tokio::select! {
                received = self.event_rx.recv() => match received {
                    Some(Ok(event)) => self.handle_event(&event),
                    Some(Err(e)) => tracing::error!("[watcher] file watch error: {e}"),
                    None => return Err(WatchError::ChannelClosed),
                },
                _ = &mut ctrl_c => {
                    crate::log_event!("watcher", "stopped");
                    return Ok(());
                }
            }
        }
    }

    fn handle_event(&mut self, event: &Event) {
        if !self.filter.is_trigger(event) {
            crate::debug_event!("watcher", "ignored", "{:?} {:?}", event.kind, event.paths);
            return;
        }
        for path in &event.paths {
            crate::debug_event!("watcher", "changed", "{}", path.display());
        }
        if !self.pending.request() {
            crate::debug_event!("watcher", "coalesced into pending rebuild");
        }
    }

    /// Fold events queued during the last run into the pending slot.
    fn drain_events(&mut self) {
        loop {
            match self.event_rx.try_recv() {
                Ok(Ok(event)) => self.handle_event(&event),
                Ok(Err(e)) => tracing::error!("[watcher] file watch error: {e}"),
                Err(_) => break,
            }
        }
    }

    /// Run the pipeline to completion on the blocking pool.
    async fn rebuild(pipeline: Arc<Mutex<Pipeline>>) {
        let result = tokio::task::spawn_blocking(move || pipeline.lock().run()).await;

        match result {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::error!("[watcher] rebuild failed: {e}"),
            Err(e) => tracing::error!("[watcher] rebuild task failed: {e}"),
        }
    }
}

/// Builder for constructing a RebuildWatcher.
pub struct RebuildWatcherBuilder {
    pipeline: Option<Pipeline>,
    ignored: Vec<String>,
}

impl RebuildWatcherBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            pipeline: None,
            ignored: vec!["node_modules".to_string()],
        }
    }

    /// Set the pipeline to re-run.
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Directory names whose events are ignored.
    pub fn ignored(mut self, ignored: Vec<String>) -> Self {
        self.ignored = ignored;
        self
    }

    /// Build the RebuildWatcher.
    pub fn build(self) -> Result<RebuildWatcher, WatchError> {
        let pipeline = self.pipeline.ok_or_else(|| WatchError::InitFailed {
            reason: "Pipeline is required".to_string(),
        })?;

        let watch_root = absolute_path(pipeline.root(), COMPONENTS_DIR);
        if !watch_root.is_dir() {
            return Err(WatchError::PathWatchFailed {
                path: watch_root,
                reason: "directory does not exist".to_string(),
            });
        }

        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.blocking_send(res);
        })?;

        Ok(RebuildWatcher {
            pipeline: Arc::new(Mutex::new(pipeline)),
            filter: EventFilter::new(self.ignored),
            pending: PendingRun::new(),
            event_rx: rx,
            watcher,
            watch_root,
        })
    }
}

impl Default for RebuildWatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
