//! List command: render the filtered, sorted catalog view.

use serde::Serialize;

use crate::core::{Status, Tracker};
use crate::storage::StatusStore;

/// Options for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Case-insensitive substring over name and category.
    pub search: Option<String>,
    /// Only show items with this effective status.
    pub status: Option<Status>,
}

/// A single rendered catalog row.
#[derive(Debug, Clone, Serialize)]
pub struct ListedItem {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    pub status: Status,
}

/// Output format for the list command.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    /// Whether the listing succeeded.
    pub success: bool,
    /// Visible items, sorted ascending by name.
    pub items: Vec<ListedItem>,
    /// Learned count over the full status map.
    pub learned: usize,
    /// Full catalog size.
    pub total: usize,
}

/// The list command implementation.
pub struct ListCommand<S: StatusStore> {
    tracker: Tracker<S>,
}

impl<S: StatusStore> ListCommand<S> {
    /// Create a new list command.
    pub fn new(tracker: Tracker<S>) -> Self {
        Self { tracker }
    }

    /// Run the list command.
    pub fn run(&mut self, options: &ListOptions) -> ListOutput {
        if let Some(search) = &options.search {
            self.tracker.update_search(search.clone());
        }
        self.tracker.update_filter(options.status);

        let view = self.tracker.view();

        let items = view
            .visible
            .into_iter()
            .map(|item| {
                let status = self.tracker.status_of(&item.id);
                ListedItem {
                    id: item.id,
                    name: item.name,
                    category: item.category,
                    rarity: item.rarity,
                    status,
                }
            })
            .collect();

        ListOutput {
            success: true,
            items,
            learned: view.learned,
            total: view.total,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &ListOutput, options: &ListOptions) -> String {
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
    fn format_human_readable(&self, output: &ListOutput) -> String {
        let mut lines = Vec::with_capacity(output.items.len() + 1);

        for item in &output.items {
            let rarity = item
                .rarity
                .as_deref()
                .map(|r| format!(" ({})", r))
                .unwrap_or_default();
            lines.push(format!(
                "{:<8} {:<28} {}{}",
                item.status, item.name, item.category, rarity
            ));
        }

        lines.push(format!("\nLearned {}/{}", output.learned, output.total));
        lines.join("\n")
    }
}
