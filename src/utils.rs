//! Some utility functions

use unicode_width::UnicodeWidthStr;

use crate::store::ListedTask;

const HEADERS: [&str; 5] = ["Index", "Task Name", "Priority", "Due Date", "Status"];

/// Render a listing as a grid table, e.g.
///
/// ```text
/// +-------+--------------+----------+------------+---------------+
/// | Index | Task Name    | Priority | Due Date   | Status        |
/// +=======+==============+==========+============+===============+
/// |     0 | Write report | High     | 2024-03-01 | Not Completed |
/// +-------+--------------+----------+------------+---------------+
/// ```
pub fn render_task_table(listed: &[ListedTask]) -> String {
    let rows: Vec<[String; 5]> = listed.iter()
        .map(|l| [
            l.index.to_string(),
            printable(l.task.name()),
            l.task.priority().label().to_string(),
            printable(l.task.due_date()),
            l.task.status_label().to_string(),
        ])
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut table = String::new();
    table.push_str(&rule(&widths, '-'));
    table.push_str(&table_row(&widths, HEADERS.iter().copied()));
    table.push_str(&rule(&widths, '='));
    for row in &rows {
        table.push_str(&table_row(&widths, row.iter().map(|cell| cell.as_str())));
        table.push_str(&rule(&widths, '-'));
    }
    table
}

/// Line breaks would split a row, they are shown the way they are escaped in task files
fn printable(field: &str) -> String {
    field.replace('\n', "\\n").replace('\r', "\\r")
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

/// The first column (indices) is right-aligned. Widths are terminal columns, not characters
fn table_row<'a, I>(widths: &[usize], cells: I) -> String
where
    I: Iterator<Item = &'a str>,
{
    let mut line = String::from("|");
    for (i_col, (width, cell)) in widths.iter().zip(cells).enumerate() {
        let padding = " ".repeat(width - cell.width());
        if i_col == 0 {
            line.push_str(&format!(" {}{} |", padding, cell));
        } else {
            line.push_str(&format!(" {}{} |", cell, padding));
        }
    }
    line.push('\n');
    line
}
