//! Stats command: aggregate collection progress.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{Status, Tracker};
use crate::storage::StatusStore;

/// Options for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the stats command.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    /// Whether the stats run succeeded.
    pub success: bool,
    /// Learned count over the full status map.
    pub learned: usize,
    /// Need count over the full status map.
    pub need: usize,
    /// Number of recorded status entries, including stale ids.
    pub tracked: usize,
    /// Full catalog size.
    pub total: usize,
    /// Modification time of the status record, when one exists on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// The stats command implementation.
pub struct StatsCommand<S: StatusStore> {
    tracker: Tracker<S>,
    status_file: Option<PathBuf>,
}

impl<S: StatusStore> StatsCommand<S> {
    /// Create a new stats command.
    pub fn new(tracker: Tracker<S>) -> Self {
        Self {
            tracker,
            status_file: None,
        }
    }

    /// Attach the status record path for last-updated reporting.
    pub fn with_status_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.status_file = Some(path.into());
        self
    }

    /// Run the stats command.
    pub fn run(&self, _options: &StatsOptions) -> StatsOutput {
        let statuses = self.tracker.statuses();

        let last_updated = self
            .status_file
            .as_deref()
            .and_then(|path| fs::metadata(path).ok())
            .and_then(|meta| meta.modified().ok())
            .map(DateTime::<Utc>::from);

        StatsOutput {
            success: true,
            learned: statuses.learned_count(),
            need: statuses.count_of(Status::Need),
            tracked: statuses.len(),
            total: self.tracker.total(),
            last_updated,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &StatsOutput, options: &StatsOptions) -> String {
        if options.quiet {
            return String::new();
        }

        if options.json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            self.format_human_readable(output)
        }
    }

    /// Format output as human-readable text.
    fn format_human_readable(&self, output: &StatsOutput) -> String {
        let mut lines = vec![
            format!("Learned: {}/{}", output.learned, output.total),
            format!("Need:    {}", output.need),
            format!("Tracked: {} entries", output.tracked),
        ];

        if let Some(updated) = output.last_updated {
            lines.push(format!(
                "Updated: {}",
                updated.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        lines.join("\n")
    }
}
