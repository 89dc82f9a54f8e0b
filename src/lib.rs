//! This crate provides a small to-do list manager.
//!
//! Tasks are kept in a [`TaskStore`](store::TaskStore), that is loaded from a local file on startup and saved back to it on exit. \
//! The [`cli`] module provides the interactive menu used by the `todo-list` binary.

pub mod task;
pub use task::{Priority, Task};
pub mod store;
pub use store::TaskStore;
pub mod error;
pub use error::{StoreError, TaskError};

pub mod format;
pub mod cli;

pub mod config;
pub mod utils;
