//! Set command: overwrite a blueprint's status explicitly.

use serde::Serialize;

use crate::core::{Status, Tracker};
use crate::storage::StatusStore;

/// Options for the set command.
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the set command.
#[derive(Debug, Clone, Serialize)]
pub struct SetOutput {
    /// Whether the set succeeded. Setting is total, so this is always
    /// true; the field exists for a uniform CLI contract.
    pub success: bool,
    /// The blueprint id that was set.
    pub id: String,
    /// The status that was written.
    pub status: Status,
    /// Display name, when the id is in the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The set command implementation.
pub struct SetCommand<S: StatusStore> {
    tracker: Tracker<S>,
}

impl<S: StatusStore> SetCommand<S> {
    /// Create a new set command.
    pub fn new(tracker: Tracker<S>) -> Self {
        Self { tracker }
    }

    /// Run the set command: unconditionally overwrite the status for `id`.
    pub fn run(&mut self, id: &str, status: Status, _options: &SetOptions) -> SetOutput {
        self.tracker.set_status(id, status);
        let name = self.tracker.dataset().get(id).map(|i| i.name.clone());

        SetOutput {
            success: true,
            id: id.to_string(),
            status,
            name,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &SetOutput, options: &SetOptions) -> String {
        if options.quiet {
            return String::new();
        }

        if options.json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            let label = output.name.as_deref().unwrap_or(&output.id);
            format!("{}: {}", label, output.status)
        }
    }
}
