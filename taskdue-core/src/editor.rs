use std::io::{BufRead, Write};

use crate::constants::*;
use crate::input::{
    acquire_date, acquire_name, acquire_priority, acquire_time, prompt, read_required,
};
use crate::task::Task;
use crate::Result;

/// Applies one field-level mutation to a task. Loops until a recognised
/// field selector is entered; each sub-editor then only returns once its own
/// input is valid, so a recognised selector always succeeds.
pub fn edit_field<R: BufRead, W: Write>(task: &mut Task, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        prompt(out, "field to edit [priority/date/time/task]: ")?;
        match read_required(input)?.as_str() {
            FIELD_PRIORITY => {
                task.priority = acquire_priority(input, out)?;
            }
            FIELD_DATE => {
                // The new date keeps the task's existing time-of-day.
                let date = acquire_date(input, out)?;
                task.deadline = date.and_time(task.deadline.time());
            }
            FIELD_TIME => {
                task.deadline = acquire_time(input, out, task.deadline.date())?;
            }
            FIELD_TASK => {
                // Unlike creation, a blank replacement name is accepted.
                task.name = acquire_name(input, out)?;
            }
            _ => {
                writeln!(out, "Invalid field.")?;
                continue;
            }
        }
        return Ok(());
    }
}
