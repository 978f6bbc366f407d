//! Cycle command: advance a blueprint to the next status.

use serde::Serialize;

use crate::core::{Status, Tracker};
use crate::storage::StatusStore;

/// Options for the cycle command.
#[derive(Debug, Clone, Default)]
pub struct CycleOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the cycle command.
#[derive(Debug, Clone, Serialize)]
pub struct CycleOutput {
    /// Whether the cycle succeeded. Cycling is total, so this is always
    /// true; the field exists for a uniform CLI contract.
    pub success: bool,
    /// The blueprint id that was cycled.
    pub id: String,
    /// Status before the cycle.
    pub previous: Status,
    /// Status after the cycle.
    pub status: Status,
    /// Display name, when the id is in the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The cycle command implementation.
pub struct CycleCommand<S: StatusStore> {
    tracker: Tracker<S>,
}

impl<S: StatusStore> CycleCommand<S> {
    /// Create a new cycle command.
    pub fn new(tracker: Tracker<S>) -> Self {
        Self { tracker }
    }

    /// Run the cycle command for a blueprint id.
    ///
    /// Ids absent from the catalog still cycle; their entries are carried
    /// in the status map unused.
    pub fn run(&mut self, id: &str, _options: &CycleOptions) -> CycleOutput {
        let previous = self.tracker.status_of(id);
        let status = self.tracker.cycle(id);
        let name = self.tracker.dataset().get(id).map(|i| i.name.clone());

        CycleOutput {
            success: true,
            id: id.to_string(),
            previous,
            status,
            name,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &CycleOutput, options: &CycleOptions) -> String {
        if options.quiet {
            return String::new();
        }

        if options.json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            let label = output.name.as_deref().unwrap_or(&output.id);
            format!("{}: {} -> {}", label, output.previous, output.status)
        }
    }

}
