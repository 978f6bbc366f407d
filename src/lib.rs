//! Bpdex - Blueprint collection tracker for ARC Raiders
//!
//! Bpdex keeps a local record of which blueprints you have learned or still
//! need, over a fixed catalog supplied as a JSON dataset. The core is a small
//! state machine per blueprint (unknown, need, learned) plus a pure view
//! derivation that applies search and status filters over the catalog.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod util;

pub use config::Config;
pub use core::{derive_view, Dataset, DerivedView, Item, Status, StatusMap, Tracker, ViewQuery};
pub use error::{FailOpen, Result, TrackerError};
pub use storage::{FileStatusStore, MemoryStatusStore, StatusStore};

// CLI commands
pub use cli::{CycleCommand, ListCommand, SetCommand, StatsCommand};
