use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::*;
use crate::task::Task;

/// Notice printed instead of a table when the collection is empty
pub const NO_TASKS_NOTICE: &str = "No tasks found. Enter `add` to create one.";

/// Renders the whole collection as a framed fixed-width table. Pure in its
/// inputs: identical (tasks, today) pairs produce identical bytes.
pub fn render(tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return format!("{}\n", NO_TASKS_NOTICE);
    }

    let mut out = String::new();
    out.push_str(&border());
    out.push('\n');
    out.push_str(&header());
    out.push('\n');
    out.push_str(&border());
    out.push('\n');

    for (i, task) in tasks.iter().enumerate() {
        for (row, text) in wrap_name(&task.name).iter().enumerate() {
            let line = if row == 0 {
                format!(
                    "| {:>width$} | {} | {} | {} | {} | {} |",
                    i + 1,
                    task.deadline.format(DATE_FORMAT),
                    task.deadline.format(TIME_FORMAT),
                    color_cell(task.priority.color()),
                    color_cell(task.tag(today).color()),
                    pad(text, TEXT_COL_WIDTH),
                    width = INDEX_COL_WIDTH,
                )
            } else {
                // Continuation rows from wrapping repeat blank placeholders
                // in every column but the text cell.
                format!(
                    "| {} | {} | {} |   |   | {} |",
                    " ".repeat(INDEX_COL_WIDTH),
                    " ".repeat(DATE_COL_WIDTH),
                    " ".repeat(TIME_COL_WIDTH),
                    pad(text, TEXT_COL_WIDTH),
                )
            };
            out.push_str(&line);
            out.push('\n');
        }
    }

    out.push_str(&border());
    out.push('\n');
    out
}

fn border() -> String {
    format!(
        "+{}+{}+{}+---+---+{}+",
        "-".repeat(INDEX_COL_WIDTH + 2),
        "-".repeat(DATE_COL_WIDTH + 2),
        "-".repeat(TIME_COL_WIDTH + 2),
        "-".repeat(TEXT_COL_WIDTH + 2),
    )
}

fn header() -> String {
    format!(
        "| {} | {} | {} | P | U | {} |",
        pad("No", INDEX_COL_WIDTH),
        pad("Date", DATE_COL_WIDTH),
        pad("Time", TIME_COL_WIDTH),
        pad("Task", TEXT_COL_WIDTH),
    )
}

/// A single space painted with a background color and reset; the cell
/// carries meaning through color alone
fn color_cell(code: u8) -> String {
    format!("\x1b[48;5;{}m \x1b[0m", code)
}

/// Pads `text` with spaces to an exact display width
fn pad(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current)))
}

/// Splits on the author's explicit line breaks first, then hard-wraps each
/// resulting line at the text column width
fn wrap_name(name: &str) -> Vec<String> {
    let mut rows = Vec::new();

    for line in name.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for ch in line.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if row_width + ch_width > TEXT_COL_WIDTH {
                rows.push(row);
                row = String::new();
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }

        rows.push(row);
    }

    rows
}
