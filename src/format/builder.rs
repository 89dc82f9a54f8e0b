//! A module to build task files

use crate::Task;
use super::{DELIMITER, ESCAPE};

/// Create the content of a task file, one line per task
pub fn build_from(tasks: &[Task]) -> String {
    let mut content = String::new();
    for task in tasks {
        content.push_str(&build_line(task));
        content.push('\n');
    }
    content
}

fn build_line(task: &Task) -> String {
    let completed = if task.completed() { "True" } else { "False" };
    format!("{name}{d}{priority}{d}{due_date}{d}{completed}",
        name = escape(task.name()),
        priority = escape(task.priority().label()),
        due_date = escape(task.due_date()),
        completed = completed,
        d = DELIMITER,
    )
}

/// Text without any special character is left as is, so that such files stay readable by older versions
fn escape(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            ESCAPE => { escaped.push(ESCAPE); escaped.push(ESCAPE); },
            DELIMITER => { escaped.push(ESCAPE); escaped.push(DELIMITER); },
            '\n' => { escaped.push(ESCAPE); escaped.push('n'); },
            '\r' => { escaped.push(ESCAPE); escaped.push('r'); },
            c => escaped.push(c),
        }
    }
    escaped
}
