//! To-do tasks

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::DATE_FORMAT;
use crate::error::TaskError;

/// How urgent a task is.
///
/// Users type a single-letter code (`H`, `M` or `L`), but tasks always store and display the full label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse a single-letter priority code, case-insensitive
    pub fn from_code(code: &str) -> Result<Self, TaskError> {
        match code.to_lowercase().as_str() {
            "h" => Ok(Priority::High),
            "m" => Ok(Priority::Medium),
            "l" => Ok(Priority::Low),
            _ => Err(TaskError::InvalidPriority(code.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a full label (`High`, `Medium` or `Low`), as found in task files
impl FromStr for Priority {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            _ => Err(format!("unknown priority {:?}", s)),
        }
    }
}

/// Check that a due date is a real calendar date written as `YYYY-MM-DD`
pub fn validate_due_date(due_date: &str) -> Result<(), TaskError> {
    // chrono alone would also accept signed or short years, and spaces before numbers
    let only_digits_and_dashes = due_date.bytes().all(|b| b.is_ascii_digit() || b == b'-');
    let four_digit_year = due_date.split('-').next().map_or(false, |year| year.len() == 4);
    if only_digits_and_dashes == false || four_digit_year == false {
        return Err(TaskError::InvalidDate(due_date.to_string()));
    }

    match NaiveDate::parse_from_str(due_date, DATE_FORMAT) {
        Ok(_) => Ok(()),
        Err(_) => Err(TaskError::InvalidDate(due_date.to_string())),
    }
}

/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The display name of the task. This can be anything, including an empty string
    name: String,
    priority: Priority,
    /// The due date, exactly as it was entered.
    /// It is validated when the task is created, but not when it is loaded from a file
    due_date: String,
    completed: bool,
}

impl Task {
    /// Create a brand new, not completed task
    pub fn new(name: String, priority: Priority, due_date: String) -> Self {
        Self::new_with_parameters(name, priority, due_date, false)
    }

    /// Create a task instance, e.g. when reading it back from a file
    pub fn new_with_parameters(name: String, priority: Priority, due_date: String, completed: bool) -> Self {
        Self {
            name,
            priority,
            due_date,
            completed,
        }
    }

    pub fn name(&self) -> &str          { &self.name      }
    pub fn priority(&self) -> Priority  { self.priority   }
    pub fn due_date(&self) -> &str      { &self.due_date  }
    pub fn completed(&self) -> bool     { self.completed  }

    /// The human-readable completion status
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Not Completed" }
    }

    /// Mark this task as completed. Completing a task twice is a no-op
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_codes() {
        assert_eq!(Priority::from_code("H"), Ok(Priority::High));
        assert_eq!(Priority::from_code("h"), Ok(Priority::High));
        assert_eq!(Priority::from_code("M"), Ok(Priority::Medium));
        assert_eq!(Priority::from_code("l"), Ok(Priority::Low));

        assert_eq!(Priority::from_code("x"), Err(TaskError::InvalidPriority("x".to_string())));
        assert!(Priority::from_code("").is_err());
        assert!(Priority::from_code("High").is_err());
    }

    #[test]
    fn test_priority_labels() {
        for prio in &[Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(prio.label().parse::<Priority>(), Ok(*prio));
            assert_eq!(prio.to_string(), prio.label());
        }
        assert!("high".parse::<Priority>().is_err());
    }

    #[test]
    fn test_due_dates() {
        assert!(validate_due_date("2024-03-01").is_ok());
        assert!(validate_due_date("2024-02-29").is_ok());

        assert_eq!(validate_due_date("2024-13-40"), Err(TaskError::InvalidDate("2024-13-40".to_string())));
        assert!(validate_due_date("2023-02-29").is_err());
        assert!(validate_due_date("01/03/2024").is_err());
        assert!(validate_due_date("tomorrow").is_err());
        assert!(validate_due_date("").is_err());

        // Single-digit months and days are fine, as long as the year has 4 digits
        assert!(validate_due_date("2024-3-1").is_ok());
        assert_eq!(validate_due_date("24-03-01"), Err(TaskError::InvalidDate("24-03-01".to_string())));
        assert!(validate_due_date("0-1-1").is_err());
        assert!(validate_due_date("12024-03-01").is_err());
        assert!(validate_due_date("+2024-03-01").is_err());
        assert!(validate_due_date(" 2024-03-01").is_err());
        assert!(validate_due_date("2024- 3-01").is_err());
        assert!(validate_due_date("2024-03-01 ").is_err());
    }

    #[test]
    fn test_completion() {
        let mut task = Task::new("Water the plants".to_string(), Priority::Low, "2024-03-01".to_string());
        assert_eq!(task.completed(), false);
        assert_eq!(task.status_label(), "Not Completed");

        task.mark_completed();
        assert_eq!(task.completed(), true);
        assert_eq!(task.status_label(), "Completed");

        task.mark_completed();
        assert_eq!(task.completed(), true);
    }
}
