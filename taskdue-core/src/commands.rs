use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::editor::edit_field;
use crate::input::{acquire_date, acquire_index, acquire_name, acquire_priority, acquire_time};
use crate::store::TaskStore;
use crate::table;
use crate::task::Task;
use crate::util::stdout_is_tty;
use crate::Result;

/// Runs the validated creation flow and appends the new task. A blank name
/// abandons the creation and leaves the collection untouched.
pub fn cmd_add<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let priority = acquire_priority(input, out)?;
    let date = acquire_date(input, out)?;
    let deadline = acquire_time(input, out, date)?;
    let name = acquire_name(input, out)?;

    if name.is_empty() {
        writeln!(out, "Blank task discarded.")?;
        return Ok(());
    }

    let task = Task::new(name, priority, deadline);
    writeln!(out, "Added {}", task)?;
    store.add(task);
    Ok(())
}

/// Renders the collection: the colored table on a terminal, the raw JSON
/// array when output is piped elsewhere
pub fn cmd_print<W: Write>(store: &TaskStore, out: &mut W, today: NaiveDate) -> Result<()> {
    if stdout_is_tty() {
        write!(out, "{}", table::render(store.tasks(), today))?;
    } else {
        writeln!(out, "{}", serde_json::to_string_pretty(store.tasks())?)?;
    }
    Ok(())
}

/// Shows the table so indices are visible, then edits one field of one task.
/// A no-op on an empty collection.
pub fn cmd_edit<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
    today: NaiveDate,
) -> Result<()> {
    write!(out, "{}", table::render(store.tasks(), today))?;
    if store.is_empty() {
        return Ok(());
    }

    let index = acquire_index(input, out, store.len())?;
    if let Some(task) = store.get_mut(index) {
        edit_field(task, input, out)?;
    }
    Ok(())
}

/// Shows the table so indices are visible, then removes one task. A no-op on
/// an empty collection.
pub fn cmd_delete<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
    today: NaiveDate,
) -> Result<()> {
    write!(out, "{}", table::render(store.tasks(), today))?;
    if store.is_empty() {
        return Ok(());
    }

    let index = acquire_index(input, out, store.len())?;
    if store.remove(index).is_some() {
        writeln!(out, "Deleted task {}.", index + 1)?;
    }
    Ok(())
}
