//! Storage layer for tdl
//!
//! Persists the full task list as a single JSON document in the data
//! directory. Every mutation rewrites the whole file; reads happen once at
//! startup.
//!
//! # Layout
//!
//! ```text
//! <data dir>/
//!   tasks.json                     # The serialized task list ("tasks" key)
//!   tasks.json.corrupt-<stamp>     # Quarantined unreadable store, if any
//! ```

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::{CorruptPolicy, StorageConfig};
use crate::error::{Error, Result};
use crate::task::Task;

/// File name backing the "tasks" storage key
pub const TASKS_FILE: &str = "tasks.json";

/// Storage manager for the task list
#[derive(Debug, Clone)]
pub struct Storage {
    /// Directory holding the task store
    data_dir: PathBuf,
}

/// Result of loading the persisted task list
#[derive(Debug)]
pub struct LoadOutcome {
    /// The loaded tasks (empty when never written or quarantined)
    pub tasks: Vec<Task>,
    /// Where the unreadable store was moved, if quarantine happened
    pub quarantined: Option<PathBuf>,
}

impl Storage {
    /// Create a storage manager over the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory: CLI flag, then config, then platform default
    pub fn resolve(flag: Option<PathBuf>, config: &StorageConfig) -> Result<Self> {
        let dir = match flag.or_else(|| config.dir.clone()) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self::new(dir))
    }

    /// Path to the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the tasks file
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    /// Read the raw serialized task list, or `None` if never written
    pub fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.tasks_file()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the full task list, overwriting any prior value (atomic)
    pub fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        self.write_atomic(&self.tasks_file(), json.as_bytes())
    }

    /// Load the persisted task list, applying the corruption policy.
    ///
    /// A missing file yields the empty list. An unreadable file is either
    /// quarantined (`Reset`) or turned into a hard error (`Fail`).
    pub fn load_tasks(&self, on_corrupt: CorruptPolicy) -> Result<LoadOutcome> {
        let content = match self.read_raw()? {
            Some(content) => content,
            None => {
                return Ok(LoadOutcome {
                    tasks: Vec::new(),
                    quarantined: None,
                })
            }
        };

        match parse_tasks(&content) {
            Ok(tasks) => Ok(LoadOutcome {
                tasks,
                quarantined: None,
            }),
            Err(err) => match on_corrupt {
                CorruptPolicy::Fail => {
                    tracing::warn!(error = %err, "task store is unreadable");
                    Err(Error::CorruptStore(self.tasks_file()))
                }
                CorruptPolicy::Reset => {
                    let backup = self.quarantine()?;
                    tracing::warn!(
                        error = %err,
                        backup = %backup.display(),
                        "task store is unreadable, starting from an empty list"
                    );
                    Ok(LoadOutcome {
                        tasks: Vec::new(),
                        quarantined: Some(backup),
                    })
                }
            },
        }
    }

    /// Write data atomically using temp file + rename
    ///
    /// Ensures readers never see partial writes: the file is either fully
    /// written or not at all.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create temp file in same directory (for atomic rename)
        let temp_path = path.with_extension("tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        // Atomic rename
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Move the unreadable tasks file aside so a fresh store can start
    fn quarantine(&self) -> Result<PathBuf> {
        let path = self.tasks_file();
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
        let backup = self.data_dir.join(format!("{TASKS_FILE}.corrupt-{stamp}"));
        fs::rename(&path, &backup)?;
        Ok(backup)
    }
}

/// Parse and validate a serialized task list
///
/// Duplicate ids are treated the same as malformed JSON: the invariant is
/// that every id in the list is unique.
fn parse_tasks(content: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(content)?;

    let mut seen = HashSet::new();
    for task in &tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(Error::InvalidArgument(format!(
                "duplicate task id: {}",
                task.id
            )));
        }
    }

    Ok(tasks)
}

/// Platform default data directory for tdl
pub fn default_data_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("", "", "tdl")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            Error::InvalidConfig("cannot determine a data directory for this platform".to_string())
        })
}
