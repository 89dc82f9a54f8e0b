//! The interactive menu

use std::error::Error;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::store::TaskStore;
use crate::utils::render_task_table;

const MENU: &str = "\nTo-Do List Application\n\n\
    1. Add Task\n\
    2. Remove Task\n\
    3. Mark Task as Completed\n\
    4. View Tasks\n\
    5. Show Not Completed Tasks Sorted by Priority\n\
    6. Exit\n";

/// An entry of the main menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuChoice {
    Add,
    Remove,
    Complete,
    View,
    ViewPendingSorted,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Remove),
            "3" => Ok(MenuChoice::Complete),
            "4" => Ok(MenuChoice::View),
            "5" => Ok(MenuChoice::ViewPendingSorted),
            "6" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

enum Flow {
    Continue,
    /// The user asked to quit, or the input has been closed
    Exit,
}

/// Runs the menu loop over any input and output (usually stdin and stdout)
pub struct Cli<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Cli<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt for menu choices until the user exits, then save the store.
    ///
    /// Closing the input is handled like the "Exit" choice.
    pub fn run(&mut self, store: &mut TaskStore) -> Result<(), Box<dyn Error>> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let choice = match self.prompt("Enter your choice: ")? {
                None => break,
                Some(choice) => choice,
            };

            let flow = match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_task(store)?,
                Ok(MenuChoice::Remove) => self.remove_task(store)?,
                Ok(MenuChoice::Complete) => self.mark_completed(store)?,
                Ok(MenuChoice::View) => self.display_tasks(store)?,
                Ok(MenuChoice::ViewPendingSorted) => self.display_pending_sorted(store)?,
                Ok(MenuChoice::Exit) => Flow::Exit,
                Err(()) => {
                    log::debug!("Unknown menu choice {:?}", choice);
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                },
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        store.save()?;
        writeln!(self.output, "Exiting the application. Your tasks have been saved.")?;
        Ok(())
    }

    /// Returns `None` when the input has been closed
    fn prompt(&mut self, message: &str) -> std::io::Result<Option<String>> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn add_task(&mut self, store: &mut TaskStore) -> std::io::Result<Flow> {
        let name = match self.prompt("Enter task name: ")? {
            None => return Ok(Flow::Exit),
            Some(s) => s,
        };
        let priority = match self.prompt("Enter priority (H/M/L): ")? {
            None => return Ok(Flow::Exit),
            Some(s) => s,
        };
        let due_date = match self.prompt("Enter due date (YYYY-MM-DD): ")? {
            None => return Ok(Flow::Exit),
            Some(s) => s,
        };

        match store.add(&name, &priority, &due_date) {
            Ok(_) => writeln!(self.output, "Task added successfully!")?,
            Err(err) => {
                log::warn!("Task {:?} was not added: {:?}", name, err);
                writeln!(self.output, "Error: {}", err)?;
            },
        }
        Ok(Flow::Continue)
    }

    fn remove_task(&mut self, store: &mut TaskStore) -> std::io::Result<Flow> {
        if store.is_empty() {
            writeln!(self.output, "No tasks found.")?;
            return Ok(Flow::Continue);
        }

        let answer = match self.prompt("Enter the task index to remove: ")? {
            None => return Ok(Flow::Exit),
            Some(s) => s,
        };
        match parse_index(&answer).map(|i| store.remove(i)) {
            Some(Ok(removed)) => writeln!(self.output, "Task '{}' removed successfully!", removed.name())?,
            _ => writeln!(self.output, "Invalid task index. No task removed!")?,
        }
        Ok(Flow::Continue)
    }

    fn mark_completed(&mut self, store: &mut TaskStore) -> std::io::Result<Flow> {
        if store.is_empty() {
            writeln!(self.output, "No tasks found.")?;
            return Ok(Flow::Continue);
        }

        let answer = match self.prompt("Enter the task index to mark as completed: ")? {
            None => return Ok(Flow::Exit),
            Some(s) => s,
        };
        match parse_index(&answer).map(|i| store.mark_completed(i)) {
            Some(Ok(_)) => writeln!(self.output, "Task marked as completed!")?,
            _ => writeln!(self.output, "Invalid task index. No task marked as completed!")?,
        }
        Ok(Flow::Continue)
    }

    fn display_tasks(&mut self, store: &TaskStore) -> std::io::Result<Flow> {
        let listed = store.list();
        if listed.is_empty() {
            writeln!(self.output, "No tasks found.")?;
        } else {
            self.output.write_all(render_task_table(&listed).as_bytes())?;
        }
        Ok(Flow::Continue)
    }

    fn display_pending_sorted(&mut self, store: &TaskStore) -> std::io::Result<Flow> {
        let pending = store.list_pending_sorted_by_priority();
        if pending.is_empty() {
            writeln!(self.output, "No not completed tasks found.")?;
        } else {
            self.output.write_all(render_task_table(&pending).as_bytes())?;
        }
        Ok(Flow::Continue)
    }
}

/// Anything that is not a non-negative integer is `None`, and is reported like an out-of-range index
fn parse_index(answer: &str) -> Option<usize> {
    answer.trim().parse().ok()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(store: &mut TaskStore, input: &str) -> String {
        let mut output = Vec::new();
        Cli::new(Cursor::new(input.as_bytes()), &mut output).run(store).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn scratch_store(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(&dir.path().join("tasks.txt"))
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Add));
        assert_eq!(" 5 ".parse::<MenuChoice>(), Ok(MenuChoice::ViewPendingSorted));
        assert_eq!("6".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("7".parse::<MenuChoice>(), Err(()));
        assert_eq!("".parse::<MenuChoice>(), Err(()));
    }

    #[test]
    fn test_add_and_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = scratch_store(&dir);

        let output = run_session(&mut store, "1\nWrite report\nh\n2024-03-01\n4\n6\n");
        assert!(output.contains("Task added successfully!"));
        assert!(output.contains("|     0 | Write report | High     | 2024-03-01 | Not Completed |"));
        assert!(output.ends_with("Exiting the application. Your tasks have been saved.\n"));

        let saved = std::fs::read_to_string(store.backing_file()).unwrap();
        assert_eq!(saved, "Write report,High,2024-03-01,False\n");
    }

    #[test]
    fn test_invalid_inputs_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = scratch_store(&dir);

        let input = "\
            9\n\
            2\n\
            3\n\
            4\n\
            5\n\
            1\nNope\nx\n2024-03-01\n\
            1\nNope\nH\n2024-13-40\n\
            6\n";
        let output = run_session(&mut store, input);

        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("No tasks found.").count(), 3);
        assert!(output.contains("No not completed tasks found."));
        assert!(output.contains("Error: Invalid priority. Please enter 'H', 'M', or 'L'."));
        assert!(output.contains("Error: Invalid date format. Please use 'YYYY-MM-DD'."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_and_complete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = scratch_store(&dir);
        store.add("Write report", "H", "2024-03-01").unwrap();
        store.add("Clean desk", "L", "2024-03-02").unwrap();
        store.add("Call bank", "M", "2024-03-03").unwrap();

        let input = "2\n1\n2\n7\n2\nabc\n3\n1\n3\n-1\n5\n6\n";
        let output = run_session(&mut store, input);

        assert!(output.contains("Task 'Clean desk' removed successfully!"));
        assert_eq!(output.matches("Invalid task index. No task removed!").count(), 2);
        assert!(output.contains("Task marked as completed!"));
        assert!(output.contains("Invalid task index. No task marked as completed!"));
        assert!(output.contains("|     0 | Write report | High     | 2024-03-01 | Not Completed |"));

        let saved = std::fs::read_to_string(store.backing_file()).unwrap();
        assert_eq!(saved, "Write report,High,2024-03-01,False\nCall bank,Medium,2024-03-03,True\n");
    }

    #[test]
    fn test_closed_input_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = scratch_store(&dir);

        let output = run_session(&mut store, "1\nUnfinished");
        assert!(output.contains("Enter priority (H/M/L): "));
        assert!(output.ends_with("Exiting the application. Your tasks have been saved.\n"));
        assert!(store.is_empty());
        assert!(store.backing_file().exists());
    }
}
