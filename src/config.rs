//! Compile-time settings

/// Where the tasks are stored, relative to the working directory.
/// A `.json` extension here would switch to the JSON flavour of the file format.
pub const TASKS_FILE: &str = "data/tasks.txt";

/// The only accepted format for due dates (`chrono` syntax)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
