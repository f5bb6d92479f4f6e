//! Command-line interface for tdl
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::storage::Storage;
use crate::task::TaskStore;

mod add;
mod list;
mod rm;
mod toggle;

/// tdl - To-Do List
///
/// A CLI that keeps a single task list with local persistence: add tasks,
/// toggle them between pending and completed, and delete them.
#[derive(Parser, Debug)]
#[command(name = "tdl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the task store (defaults to the platform data dir)
    #[arg(long, global = true, env = "TDL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to a tdl.toml config file
    #[arg(long, global = true, env = "TDL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task to the list
    Add {
        /// Task title
        title: String,
    },

    /// Toggle a task between pending and completed
    Toggle {
        /// Task id or unique id prefix
        id: String,
    },

    /// Delete a task from the list
    #[command(visible_alias = "delete")]
    Rm {
        /// Task id or unique id prefix
        id: String,
    },

    /// List tasks, split into pending and completed
    List {
        /// Show only pending tasks
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Show only completed tasks
        #[arg(long)]
        completed: bool,
    },
}

impl Cli {
    /// Execute the parsed command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { title } => add::run_add(add::AddOptions {
                title,
                data_dir: self.data_dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Toggle { id } => toggle::run_toggle(toggle::ToggleOptions {
                id,
                data_dir: self.data_dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { id } => rm::run_rm(rm::RmOptions {
                id,
                data_dir: self.data_dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { pending, completed } => list::run_list(list::ListOptions {
                pending,
                completed,
                data_dir: self.data_dir,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Shared command context: the opened store plus startup warnings
pub(crate) struct Context {
    pub store: TaskStore,
    pub warnings: Vec<String>,
}

/// Load config, resolve storage, and open the task store
pub(crate) fn load_context(
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<Context> {
    let config = Config::load(config_path.as_deref())?;
    let storage = Storage::resolve(data_dir, &config.storage)?;
    let store = TaskStore::open(storage, config.storage.on_corrupt)?;

    let mut warnings = Vec::new();
    if let Some(backup) = store.quarantined() {
        warnings.push(format!(
            "task store was unreadable; previous contents moved to {}",
            backup.display()
        ));
    }

    Ok(Context { store, warnings })
}

/// Short display form of a task id
pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
