//! Watch mode: rebuild the whole metadata file on component changes.
//!
//! # Architecture
//!
//! ```text
//! notify::RecommendedWatcher (src/components, recursive)
//!         |
//!    EventFilter (modify/remove, ignored dirs)
//!         |
//!    PendingRun (at most one queued rebuild)
//!         |
//!    Pipeline::run on the blocking pool, awaited
//! ```
//!
//! Runs never overlap. Events that arrive during a run collapse into a
//! single follow-up run.

mod error;
mod filter;
mod pending;
mod rebuild;

pub use error::WatchError;
pub use filter::EventFilter;
pub use pending::PendingRun;
pub use rebuild::{RebuildWatcher, RebuildWatcherBuilder};
