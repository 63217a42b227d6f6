//! The task store: an ordered in-memory task list mirrored to a JSON file.
//!
//! Every mutation goes through the same sequence: change the in-memory list,
//! then rewrite the whole backing file. The file is a single JSON array and
//! its element order is the order shown to the user, so the 1-based task
//! number printed by the list view is the handle for edit and delete.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::task::{Task, TaskPatch};

/// Failures surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The given task number does not refer to a record. No mutation applied.
    #[error("invalid task number {raw:?}: expected a number between 1 and {len}")]
    InvalidIndex { raw: String, len: usize },
    /// The task file could not be written. In-memory state is kept and stays
    /// authoritative until a later save succeeds.
    #[error("could not write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Totals reported by [`TaskStore::statistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}

/// Exact-equality values accepted by [`TaskStore::filter`].
///
/// Priority comparisons are numeric, everything else is string equality, so
/// the caller has to say which one it means.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Priority(i64),
}

/// In-memory task list plus the path of its JSON mirror.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load a store from `path`, starting empty when the file is absent or
    /// does not parse. A parse failure is reported on stderr but never fatal;
    /// the broken file is left alone until the next save overwrites it.
    pub fn load(path: &Path) -> Self {
        let tasks = if path.exists() {
            match fs::read_to_string(path) {
                Ok(buf) => match serde_json::from_str::<Vec<Task>>(&buf) {
                    Ok(tasks) => tasks,
                    Err(e) => {
                        warn!("unparseable task file {}: {e}", path.display());
                        eprintln!("Could not parse {}, starting with an empty list: {e}", path.display());
                        Vec::new()
                    }
                },
                Err(e) => {
                    warn!("unreadable task file {}: {e}", path.display());
                    eprintln!("Could not read {}, starting with an empty list: {e}", path.display());
                    Vec::new()
                }
            }
        } else {
            debug!("no task file at {}, starting empty", path.display());
            Vec::new()
        };

        TaskStore {
            path: path.to_path_buf(),
            tasks,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Order-preserving view of every record. Display, search, and filter all
    /// read through this; nothing mutates through it.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Rewrite the backing file with the current list, pretty-printed.
    /// Goes through a temp file + rename so readers never see a partial array.
    pub fn save(&self) -> Result<(), StoreError> {
        self.write_file().map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source,
        })
    }

    fn write_file(&self) -> io::Result<()> {
        let data = serde_json::to_string_pretty(&self.tasks).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        debug!("saved {} task(s) to {}", self.tasks.len(), self.path.display());
        Ok(())
    }

    /// Append an already-validated record, then save.
    pub fn add(&mut self, task: Task) -> Result<(), StoreError> {
        self.tasks.push(task);
        self.save()
    }

    /// Records whose name or description contains `keyword`, case-insensitively.
    /// An empty keyword matches every record, since the empty string is a
    /// substring of anything.
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        self.select(|t| t.matches_keyword(keyword))
    }

    /// Records where `field` equals `value` exactly. Only `status`,
    /// `priority_level`, and `due_date` are filterable; any other field name
    /// matches nothing.
    pub fn filter(&self, field: &str, value: &FilterValue) -> Vec<&Task> {
        self.select(|t| field_matches(t, field, value))
    }

    fn select<'a>(&'a self, predicate: impl Fn(&Task) -> bool) -> Vec<&'a Task> {
        self.tasks.iter().filter(|t| predicate(t)).collect()
    }

    /// Parse a raw 1-based task number and range-check it against the current
    /// list. This is the only accepted way to turn user input into an index.
    pub fn resolve_index(&self, raw: &str) -> Result<usize, StoreError> {
        let trimmed = raw.trim();
        let number = trimmed.parse::<usize>().map_err(|_| StoreError::InvalidIndex {
            raw: trimmed.to_string(),
            len: self.tasks.len(),
        })?;
        self.slot(number)?;
        Ok(number)
    }

    /// Apply the fields present in `patch` to the task at 1-based `number`,
    /// then save. An out-of-range number changes nothing.
    pub fn edit(&mut self, number: usize, patch: &TaskPatch) -> Result<(), StoreError> {
        let slot = self.slot(number)?;
        patch.apply_to(&mut self.tasks[slot]);
        self.save()
    }

    /// Remove and return the task at 1-based `number`, then save. An
    /// out-of-range number changes nothing.
    pub fn delete(&mut self, number: usize) -> Result<Task, StoreError> {
        let slot = self.slot(number)?;
        let removed = self.tasks.remove(slot);
        self.save()?;
        Ok(removed)
    }

    /// Total record count and the count with status exactly "Finished".
    pub fn statistics(&self) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.is_finished()).count(),
        }
    }

    // 1-based display number to 0-based vector position.
    fn slot(&self, number: usize) -> Result<usize, StoreError> {
        if (1..=self.tasks.len()).contains(&number) {
            Ok(number - 1)
        } else {
            Err(StoreError::InvalidIndex {
                raw: number.to_string(),
                len: self.tasks.len(),
            })
        }
    }
}

fn field_matches(task: &Task, field: &str, value: &FilterValue) -> bool {
    match (field, value) {
        ("status", FilterValue::Text(v)) => task.status.as_deref() == Some(v.as_str()),
        ("priority_level", FilterValue::Priority(n)) => task.priority_level == Some(*n),
        ("due_date", FilterValue::Text(v)) => task.task_due_date == *v,
        _ => false,
    }
}
