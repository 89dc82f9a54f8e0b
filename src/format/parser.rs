//! A module to parse task files

use crate::error::StoreError;
use crate::task::Priority;
use crate::Task;
use super::{DELIMITER, ESCAPE};

const N_FIELDS: usize = 4;

/// Parse the content of a task file into a list of [`crate::Task`]s.
///
/// Blank lines are ignored. Names and due dates are taken as they are, without validation.
pub fn parse(content: &str) -> Result<Vec<Task>, StoreError> {
    let mut tasks = Vec::new();

    for (i_line, line) in content.lines().enumerate() {
        // `lines()` already handles `\r\n`, this is for stray carriage returns at the end of the file
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        let task = parse_line(line).map_err(|reason| StoreError::MalformedLine {
            line: i_line + 1,
            reason,
        })?;
        tasks.push(task);
    }

    Ok(tasks)
}

fn parse_line(line: &str) -> Result<Task, String> {
    let mut fields = split_fields(line);
    if fields.len() != N_FIELDS {
        return Err(format!("expected {} fields, found {}", N_FIELDS, fields.len()));
    }

    // Fields are consumed from the back, so that we can move them out of the vector
    let completed = fields.pop().unwrap_or_default() == "True";
    let due_date = fields.pop().unwrap_or_default();
    let priority: Priority = fields.pop().unwrap_or_default().parse()?;
    let name = fields.pop().unwrap_or_default();

    Ok(Task::new_with_parameters(name, priority, due_date, completed))
}

/// Split a line on unescaped delimiters, and unescape every field
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(ESCAPE) => current.push(ESCAPE),
                Some(DELIMITER) => current.push(DELIMITER),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                // Unknown sequences are kept verbatim
                Some(other) => { current.push(ESCAPE); current.push(other); },
                None => current.push(ESCAPE),
            },
            DELIMITER => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);

    fields
}
