//! Bpdex - Blueprint collection tracker for ARC Raiders
//!
//! CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use bpdex::config::{status_file_path, Config};
use bpdex::core::{Dataset, Status, Tracker};
use bpdex::storage::{FileStatusStore, MemoryStatusStore, StatusStore};

// =============================================================================
// CLI Definition
// =============================================================================

/// Bpdex - Blueprint collection tracker for ARC Raiders
#[derive(Parser)]
#[command(name = "bpdex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List blueprints with optional search and status filter
    List {
        /// Case-insensitive substring over name and category
        #[arg(long, short)]
        search: Option<String>,
        /// Only show blueprints with this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Advance a blueprint to its next status (unknown -> need -> learned)
    Cycle {
        /// The blueprint id
        id: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Set a blueprint's status explicitly
    Set {
        /// The blueprint id
        id: String,
        /// The status to record
        #[arg(value_enum)]
        status: StatusArg,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show collection progress
    Stats {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Unknown,
    Need,
    Learned,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Unknown => Status::Unknown,
            StatusArg::Need => Status::Need,
            StatusArg::Learned => Status::Learned,
        }
    }
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bpdex error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the CLI and return the exit code.
fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            search,
            status,
            json,
            quiet,
        } => run_list(search, status, json, quiet),
        Commands::Cycle { id, json, quiet } => run_cycle(&id, json, quiet),
        Commands::Set {
            id,
            status,
            json,
            quiet,
        } => run_set(&id, status, json, quiet),
        Commands::Stats { json, quiet } => run_stats(json, quiet),
    }
}

/// Load the catalog and persisted statuses into a tracker.
///
/// A missing dataset is operator misconfiguration and errors out. An
/// unavailable status store is not: tracking degrades to memory only for
/// this invocation.
fn load_tracker() -> Result<Tracker<Arc<dyn StatusStore>>, Box<dyn std::error::Error>> {
    let config = Config::load();

    let dataset_path = config
        .dataset_path()
        .ok_or("could not determine dataset path (no home directory)")?;
    let dataset = Dataset::load(&dataset_path).map_err(|e| {
        format!(
            "{} (set dataset.path in config.toml or BPDEX_DATASET)",
            e
        )
    })?;

    let store: Arc<dyn StatusStore> = match FileStatusStore::new() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("status storage unavailable: {} (tracking in memory only)", e);
            Arc::new(MemoryStatusStore::new())
        }
    };

    Ok(Tracker::new(dataset, store))
}

// =============================================================================
// Command Implementations
// =============================================================================

fn run_list(
    search: Option<String>,
    status: Option<StatusArg>,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use bpdex::cli::list::{ListCommand, ListOptions};

    let mut cmd = ListCommand::new(load_tracker()?);
    let options = ListOptions {
        json,
        quiet,
        search,
        status: status.map(Into::into),
    };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_cycle(id: &str, json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use bpdex::cli::cycle::{CycleCommand, CycleOptions};

    let mut cmd = CycleCommand::new(load_tracker()?);
    let options = CycleOptions { json, quiet };

    let output = cmd.run(id, &options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_set(
    id: &str,
    status: StatusArg,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use bpdex::cli::set::{SetCommand, SetOptions};

    let mut cmd = SetCommand::new(load_tracker()?);
    let options = SetOptions { json, quiet };

    let output = cmd.run(id, status.into(), &options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_stats(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use bpdex::cli::stats::{StatsCommand, StatsOptions};

    let mut cmd = StatsCommand::new(load_tracker()?);
    if let Some(path) = status_file_path() {
        cmd = cmd.with_status_file(path);
    }
    let options = StatsOptions { json, quiet };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// Tests
// =============================================================================
