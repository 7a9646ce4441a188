//! Single-slot run queue.

/// At most one queued rebuild.
///
/// Requests made while a run is already queued merge into it.
#[derive(Debug, Default)]
pub struct PendingRun {
    pending: bool,
    coalesced: usize,
}

impl PendingRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a run. Returns false when it merged into an already queued run.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Dequeue the run, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total requests merged into an earlier one since creation.
    pub fn coalesced(&self) -> usize {
        self.coalesced
    }
}
