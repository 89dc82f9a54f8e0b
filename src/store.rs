//! This module provides the task list, and its persistence to a local file

use std::path::{Path, PathBuf};

use crate::error::{StoreError, TaskError};
use crate::format::Format;
use crate::task::{validate_due_date, Priority};
use crate::Task;


/// An ordered list of tasks, backed by a local file
///
/// Tasks have no identifier: they are designated by their current position in the list.
#[derive(Debug, PartialEq)]
pub struct TaskStore {
    backing_file: PathBuf,
    tasks: Vec<Task>,
}

/// A task, along with the index it is displayed with
#[derive(Debug, PartialEq)]
pub struct ListedTask<'a> {
    pub index: usize,
    pub task: &'a Task,
}

impl TaskStore {
    /// Initialize an empty store
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            tasks: Vec::new(),
        }
    }

    /// Initialize a store from the content of its backing file.
    ///
    /// A missing file is not an error, it just means there is no task yet.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No task file at {:?}, starting with an empty list", path);
                return Ok(Self::new(path));
            },
            Err(err) => {
                return Err(StoreError::Io { path: PathBuf::from(path), source: err });
            },
            Ok(content) => content,
        };

        let tasks = Format::from_path(path).decode(&content)?;
        log::info!("Loaded {} tasks from {:?}", tasks.len(), path);

        Ok(Self {
            backing_file: PathBuf::from(path),
            tasks,
        })
    }

    /// Store the current tasks to the backing file, replacing its previous content.
    /// Missing parent folders are created.
    pub fn save(&self) -> Result<(), StoreError> {
        let path = &self.backing_file;
        let io_err = |source| StoreError::Io { path: path.clone(), source };

        if let Some(parent) = path.parent() {
            if parent.as_os_str().is_empty() == false {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let content = Format::from_path(path).encode(&self.tasks)?;
        std::fs::write(path, content).map_err(io_err)?;
        log::info!("Saved {} tasks to {:?}", self.tasks.len(), path);
        Ok(())
    }

    pub fn backing_file(&self) -> &Path { &self.backing_file }
    pub fn tasks(&self) -> &[Task]      { &self.tasks }
    pub fn len(&self) -> usize          { self.tasks.len() }
    pub fn is_empty(&self) -> bool      { self.tasks.is_empty() }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Append a new task at the end of the list.
    ///
    /// `priority_code` is `H`, `M` or `L` (case-insensitive), `due_date` must be a `YYYY-MM-DD` date.
    /// Nothing is added in case of an error.
    pub fn add(&mut self, name: &str, priority_code: &str, due_date: &str) -> Result<&Task, TaskError> {
        let priority = Priority::from_code(priority_code)?;
        validate_due_date(due_date)?;

        let index = self.tasks.len();
        log::debug!("Adding task #{} {:?} ({}, due {})", index, name, priority, due_date);
        self.tasks.push(Task::new(name.to_string(), priority, due_date.to_string()));
        Ok(&self.tasks[index])
    }

    /// Remove the task at a given position. Subsequent tasks are shifted down by one.
    pub fn remove(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        log::debug!("Removed task #{} {:?}", index, removed.name());
        Ok(removed)
    }

    /// Mark the task at a given position as completed. This is a no-op for already completed tasks.
    pub fn mark_completed(&mut self, index: usize) -> Result<&Task, TaskError> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.mark_completed();
        log::debug!("Marked task #{} {:?} as completed", index, task.name());
        Ok(task)
    }

    /// All tasks, in the order they were added, with their current positions
    pub fn list(&self) -> Vec<ListedTask<'_>> {
        self.tasks.iter()
            .enumerate()
            .map(|(index, task)| ListedTask { index, task })
            .collect()
    }

    /// Tasks that are not completed yet, sorted by priority.
    ///
    /// Priorities are sorted by the alphabetical order of their labels (i.e. `High`, then `Low`, then `Medium`), as this app always did.
    /// Indices are re-numbered from 0 in this listing: they do not match the indices expected by [`Self::remove`] or [`Self::mark_completed`]
    pub fn list_pending_sorted_by_priority(&self) -> Vec<ListedTask<'_>> {
        let mut pending: Vec<&Task> = self.tasks.iter()
            .filter(|task| task.completed() == false)
            .collect();
        pending.sort_by(|a, b| a.priority().label().cmp(b.priority().label()));

        pending.into_iter()
            .enumerate()
            .map(|(index, task)| ListedTask { index, task })
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index >= self.tasks.len() {
            log::warn!("Task index {} is out of range ({} tasks)", index, self.tasks.len());
            return Err(TaskError::IndexOutOfRange { index, len: self.tasks.len() });
        }
        Ok(())
    }
}
