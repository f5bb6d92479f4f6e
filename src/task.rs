//! Task list store for tdl.
//!
//! Holds the ordered in-memory task list and writes it through to storage
//! after every mutation. Pending and completed views are computed on demand
//! from the single source list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::CorruptPolicy;
use crate::error::{Error, Result};
use crate::storage::Storage;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,
    /// Title supplied by the user at creation time, immutable
    pub title: String,
    /// Completion flag, toggled by user action
    pub completed: bool,
}

impl Task {
    /// Construct a pending task with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
        }
    }
}

/// The task list store: the single in-memory list plus its backing storage
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
    quarantined: Option<std::path::PathBuf>,
}

impl TaskStore {
    /// Open the store, loading the persisted list
    pub fn open(storage: Storage, on_corrupt: CorruptPolicy) -> Result<Self> {
        let outcome = storage.load_tasks(on_corrupt)?;
        Ok(Self {
            storage,
            tasks: outcome.tasks,
            quarantined: outcome.quarantined,
        })
    }

    /// Where an unreadable store was quarantined during open, if anywhere
    pub fn quarantined(&self) -> Option<&std::path::Path> {
        self.quarantined.as_deref()
    }

    /// The full task list, insertion order preserved
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks with `completed == false`, in list order
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }

    /// Tasks with `completed == true`, in list order
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    /// Add a task with the given title to the end of the list.
    ///
    /// Fails with [`Error::EmptyTitle`] when the trimmed title is empty; the
    /// list is unchanged in that case. The title is stored as given.
    pub fn add(&mut self, title: &str) -> Result<Task> {
        if title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        let task = Task::new(title);
        self.tasks.push(task.clone());
        self.persist()?;

        tracing::debug!(id = %task.id, "task added");
        Ok(task)
    }

    /// Invert the completion flag of the task with the given id.
    ///
    /// An absent id is a silent no-op returning `None`. All other tasks and
    /// their relative order are unchanged.
    pub fn toggle(&mut self, id: &str) -> Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };

        task.completed = !task.completed;
        let updated = task.clone();
        self.persist()?;

        tracing::debug!(id = %updated.id, completed = updated.completed, "task toggled");
        Ok(Some(updated))
    }

    /// Remove the task with the given id, returning the removed count (0 or 1).
    ///
    /// An absent id is a silent no-op.
    pub fn remove(&mut self, id: &str) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = before - self.tasks.len();

        if removed > 0 {
            self.persist()?;
            tracing::debug!(id, "task removed");
        }

        Ok(removed)
    }

    /// Find a task by its full id
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Resolve an id or unique id prefix to a full task id.
    ///
    /// Returns `None` when nothing matches (callers treat that as the
    /// store-level no-op path). An ambiguous prefix is an error.
    pub fn resolve_id(&self, input: &str) -> Result<Option<String>> {
        let trimmed = input.trim().to_ascii_lowercase();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument("task id cannot be empty".to_string()));
        }

        if let Some(task) = self.tasks.iter().find(|task| task.id == trimmed) {
            return Ok(Some(task.id.clone()));
        }

        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.id.starts_with(&trimmed))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches[0].id.clone())),
            _ => {
                let ids: Vec<&str> = matches.iter().map(|task| task.id.as_str()).collect();
                Err(Error::InvalidArgument(format!(
                    "ambiguous task id '{}': {}",
                    input.trim(),
                    ids.join(", ")
                )))
            }
        }
    }

    /// Write the exact in-memory list through to storage.
    ///
    /// Persists `self.tasks` itself, never a recomputed copy.
    fn persist(&self) -> Result<()> {
        self.storage.write_tasks(&self.tasks)
    }
}
